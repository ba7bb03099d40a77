#![forbid(unsafe_code)]

//! Catalog reconciliation and its findings

mod findings;
mod reconciler;

pub use findings::{Finding, FindingKind, Report};
pub use reconciler::validate_and_report;
