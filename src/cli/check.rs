//! Check command implementation
//!
//! `--check` runs catalog validation on its own, without generating a
//! document. It is meant for CI on the catalog itself.

use crate::cli::common::{
    EXIT_ERROR, EXIT_FINDINGS, EXIT_SUCCESS, RunOptions, load_catalog, report_findings, validate,
};
use crate::error::GenError;
use crate::reconcile::Report;

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Catalog is consistent
/// - 1: Validation findings
/// - 2: Catalog error
pub fn run_check(options: &RunOptions) -> i32 {
    match check(options) {
        Ok(report) => {
            report_findings(&report, options);
            if report.is_empty() {
                EXIT_SUCCESS
            } else {
                EXIT_FINDINGS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Load and validate the catalog
///
/// # Errors
///
/// Returns `GenError::Catalog` if the catalog cannot be loaded.
pub fn check(options: &RunOptions) -> Result<Report, GenError> {
    let catalog = load_catalog(options)?;
    Ok(validate(&catalog))
}
