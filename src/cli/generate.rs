//! Generate command implementation
//!
//! This module implements the default command, which:
//! - Loads the built-in catalog (plus an optional catalog directory)
//! - Resolves the requested profile
//! - Validates every rule source, refusing to continue on any finding
//! - Merges the profile's sources into its base skeleton
//! - Writes the document to stdout

use crate::cli::common::{
    EXIT_ERROR, EXIT_FINDINGS, EXIT_SUCCESS, PROGRAM_NAME, RunOptions, load_catalog,
    report_findings, validate,
};
use crate::error::{GenError, UsageError};
use crate::merge::build_document;
use crate::output::write_document;
use crate::reconcile::Report;
use std::io::{self, Write};

/// Result of a generate run that did not hit an error
#[derive(Debug)]
pub enum GenerateOutcome {
    /// The document was written
    Written,
    /// Validation failed; nothing was written
    Rejected(Report),
}

/// Run the generate command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (document written)
/// - 1: Validation findings (nothing written)
/// - 2: Usage or catalog error
pub fn run_generate(profile: Option<&str>, options: &RunOptions) -> i32 {
    let stdout = io::stdout();
    match generate(profile, options, stdout.lock()) {
        Ok(GenerateOutcome::Written) => EXIT_SUCCESS,
        Ok(GenerateOutcome::Rejected(report)) => {
            report_findings(&report, options);
            EXIT_FINDINGS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Generate the document for `profile` into `out`
///
/// # Errors
///
/// Returns `GenError::Usage` if the profile is missing or unknown,
/// `GenError::Catalog` if the catalog cannot be loaded, and
/// `GenError::Serialize` if the document cannot be written.
pub fn generate<W: Write>(
    profile: Option<&str>,
    options: &RunOptions,
    out: W,
) -> Result<GenerateOutcome, GenError> {
    let catalog = load_catalog(options)?;

    let name = profile.ok_or_else(|| UsageError::MissingProfile {
        program: PROGRAM_NAME.to_string(),
        available: catalog.profile_names(),
    })?;
    let profile = catalog
        .profile(name)
        .ok_or_else(|| UsageError::UnknownProfile {
            name: name.to_string(),
            program: PROGRAM_NAME.to_string(),
            available: catalog.profile_names(),
        })?;

    let report = validate(&catalog);
    if !report.is_empty() {
        return Ok(GenerateOutcome::Rejected(report));
    }

    let document = build_document(&catalog, profile)?;
    write_document(out, &document)?;
    Ok(GenerateOutcome::Written)
}
