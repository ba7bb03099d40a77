#![forbid(unsafe_code)]

//! Core domain types for eslintrc-gen
//!
//! This module defines the small value types shared by the catalog, the
//! reconciler and the document emitter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The configured value of a single rule
///
/// Either a bare severity (`"error"`, `"warn"`, `"off"`) or a severity
/// followed by rule options. The payload is opaque to this crate and is
/// copied into the generated document unchanged.
pub type RuleSetting = serde_json::Value;

/// Rule name → setting, in authoring order
pub type RuleTable = serde_json::Map<String, RuleSetting>;

/// Separator placed between a prefix and a rule name
pub const PREFIX_SEPARATOR: char = '/';

/// A validated rule name prefix
///
/// The empty prefix is valid and means "no prefix". A non-empty prefix
/// must not begin or end with `/` and must not contain whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prefix(String);

impl Prefix {
    /// Creates a new Prefix, validating the input
    ///
    /// Returns None if the input starts or ends with `/` or contains
    /// whitespace.
    pub fn new(prefix: impl Into<String>) -> Option<Self> {
        let prefix = prefix.into();
        if prefix.starts_with(PREFIX_SEPARATOR) || prefix.ends_with(PREFIX_SEPARATOR) {
            return None;
        }
        if prefix.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Prefix(prefix))
    }

    /// The empty prefix
    pub fn none() -> Self {
        Prefix(String::new())
    }

    /// Returns the prefix as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies the prefix to a rule name
    ///
    /// `svelte` + `indent` gives `svelte/indent`; the empty prefix returns
    /// the name unchanged.
    pub fn apply(&self, name: &str) -> String {
        if self.0.is_empty() {
            return name.to_string();
        }
        let mut prefixed = String::with_capacity(self.0.len() + 1 + name.len());
        prefixed.push_str(&self.0);
        prefixed.push(PREFIX_SEPARATOR);
        prefixed.push_str(name);
        prefixed
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Prefix {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Prefix::new(value.clone()).ok_or_else(|| format!("Invalid rule prefix '{}'", value))
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.0
    }
}
