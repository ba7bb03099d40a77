#![forbid(unsafe_code)]

//! eslintrc-gen: ESLint configuration from checked rule catalogs
//!
//! Rules from several upstream packages are kept in per-package catalogs.
//! Each catalog is reconciled against the list of rules its package
//! actually exports, then the catalogs a profile selects are merged into one
//! prefixed rule table and written into the profile's base document.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod merge;
pub mod output;
pub mod reconcile;
pub mod types;

// Re-export error types for convenient access
pub use error::{CatalogError, GenError, UsageError};

// Re-export core domain types for convenient access
pub use catalog::{Catalog, Profile, RuleSource};
pub use merge::{build_document, merge};
pub use reconcile::{Finding, FindingKind, Report, validate_and_report};
pub use types::{Prefix, RuleSetting, RuleTable};
