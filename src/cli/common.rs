//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading the catalog,
//! validating it and reporting findings.

use crate::catalog::Catalog;
use crate::cli::args::{Cli, ColorChoice, OutputFormat};
use crate::error::CatalogError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::reconcile::{Report, validate_and_report};
use std::path::PathBuf;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Program name shown in usage messages
pub const PROGRAM_NAME: &str = "eslintrc-gen";

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub catalog_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            catalog_dir: cli.catalog.clone(),
            format: cli.format,
            color: cli.color,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            format: OutputFormat::Human,
            color: ColorChoice::Never,
        }
    }
}

/// Load the built-in catalog, layered with the configured directory
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be loaded.
pub(crate) fn load_catalog(options: &RunOptions) -> Result<Catalog, CatalogError> {
    Catalog::load(options.catalog_dir.as_deref())
}

/// Validate every source in the catalog
pub(crate) fn validate(catalog: &Catalog) -> Report {
    let report = validate_and_report(catalog.sources());
    tracing::info!(
        sources = catalog.sources().len(),
        findings = report.len(),
        "validated catalog"
    );
    report
}

/// Write findings to stderr in the requested format
///
/// Human output is skipped for a clean report; JSONL always ends with a
/// status record.
pub(crate) fn report_findings(report: &Report, options: &RunOptions) {
    match options.format {
        OutputFormat::Human => {
            if report.is_empty() {
                return;
            }
            if let Err(e) = HumanFormatter::new().write_to_stderr(report, options.color.into()) {
                tracing::error!(error = %e, "failed to write diagnostics");
            }
        }
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stderr(report),
    }
}
