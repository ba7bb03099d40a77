#![forbid(unsafe_code)]

//! Catalog listing formatters
//!
//! This module provides formatters for the `--list` output. It supports
//! both human-readable and JSONL output formats.

use crate::catalog::Catalog;
use serde::Serialize;

/// Human-readable formatter for the catalog listing
pub struct ListingHumanFormatter;

impl ListingHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        ListingHumanFormatter
    }

    /// Format the catalog for human consumption
    pub fn format(&self, catalog: &Catalog) -> String {
        let mut output = String::new();

        output.push_str(&format!("Profiles ({}):\n", catalog.profiles().len()));
        output.push('\n');
        for profile in catalog.profiles() {
            output.push_str(&format!("{}\n", profile.name()));
            if let Some(description) = profile.description() {
                output.push_str(&format!("  Description: {}\n", description));
            }
            output.push_str(&format!("  Sources: {}\n", profile.sources().join(", ")));
            output.push('\n');
        }

        output.push_str(&format!("Sources ({}):\n", catalog.sources().len()));
        output.push('\n');
        for source in catalog.sources() {
            output.push_str(&format!("{}\n", source.name()));
            let prefix = if source.prefix().is_empty() {
                "(none)"
            } else {
                source.prefix().as_str()
            };
            output.push_str(&format!("  Prefix: {}\n", prefix));
            output.push_str(&format!("  Rules: {}\n", source.rules().len()));
            match (source.version(), source.updated()) {
                (Some(version), Some(updated)) => {
                    output.push_str(&format!("  Upstream: {} (updated {})\n", version, updated))
                }
                (Some(version), None) => output.push_str(&format!("  Upstream: {}\n", version)),
                (None, Some(updated)) => {
                    output.push_str(&format!("  Upstream: updated {}\n", updated))
                }
                (None, None) => {}
            }
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, catalog: &Catalog) {
        print!("{}", self.format(catalog));
    }
}

impl Default for ListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct JsonlSource<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    prefix: &'a str,
    rules: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonlProfile<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    sources: &'a [String],
}

/// JSONL formatter for the catalog listing
pub struct ListingJsonlFormatter;

impl ListingJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        ListingJsonlFormatter
    }

    /// Format the catalog as JSONL
    ///
    /// One record per source, then one record per profile.
    pub fn format(&self, catalog: &Catalog) -> String {
        let mut output = String::new();

        for source in catalog.sources() {
            let record = JsonlSource {
                record_type: "source",
                name: source.name(),
                prefix: source.prefix().as_str(),
                rules: source.rules().len(),
                version: source.version(),
                updated: source.updated(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        for profile in catalog.profiles() {
            let record = JsonlProfile {
                record_type: "profile",
                name: profile.name(),
                description: profile.description(),
                sources: profile.sources(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, catalog: &Catalog) {
        print!("{}", self.format(catalog));
    }
}

impl Default for ListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
