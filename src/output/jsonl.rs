#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable diagnostics
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All finding records, in reporting order
//! 2. One status record

use crate::reconcile::{FindingKind, Report};
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as JSONL
    pub fn format(&self, report: &Report) -> String {
        let mut output = String::new();

        for finding in report.findings() {
            let record = FindingRecord {
                record_type: "finding",
                category: finding.kind,
                source: &finding.source,
                subject: &finding.subject,
                detail: finding.detail.as_deref(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let status = StatusRecord {
            record_type: "status",
            findings: report.len(),
            passed: report.is_empty(),
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stderr
    pub fn write_to_stderr(&self, report: &Report) {
        eprint!("{}", self.format(report));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    category: FindingKind,
    source: &'a str,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    findings: usize,
    passed: bool,
}
