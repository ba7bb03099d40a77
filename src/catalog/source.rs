#![forbid(unsafe_code)]

//! Rule source definitions
//!
//! A rule source is one upstream rule package (ESLint core, a plugin, ...)
//! together with the settings this project chooses for each of its rules.
//! Sources are authored as TOML:
//!
//! ```toml
//! [source]
//! name = "svelte"
//! prefix = "svelte"
//! from_js = ["indent", "valid-compile"]
//! from_js_deprecated = []
//!
//! [rules]
//! "indent" = ["warn", { indent = 4 }]
//! "valid-compile" = "error"
//! ```

use crate::error::CatalogError;
use crate::types::{Prefix, RuleSetting, RuleTable};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One upstream rule package and its configured rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSource {
    name: String,
    prefix: Prefix,
    version: Option<String>,
    updated: Option<String>,
    rules: RuleTable,
    from_js: Vec<String>,
    from_js_deprecated: Vec<String>,
}

/// On-disk layout of a source file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceFile {
    source: SourceMeta,
    #[serde(default)]
    rules: RuleTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceMeta {
    name: String,
    #[serde(default)]
    prefix: Prefix,
    version: Option<String>,
    updated: Option<String>,
    #[serde(default)]
    from_js: Vec<String>,
    #[serde(default)]
    from_js_deprecated: Vec<String>,
}

impl RuleSource {
    /// Creates a source with no rules and empty inventories
    pub fn new(name: impl Into<String>, prefix: Prefix) -> Self {
        Self {
            name: name.into(),
            prefix,
            version: None,
            updated: None,
            rules: RuleTable::new(),
            from_js: Vec::new(),
            from_js_deprecated: Vec::new(),
        }
    }

    /// Adds a configured rule, keeping authoring order
    pub fn with_rule(mut self, name: impl Into<String>, setting: impl Into<RuleSetting>) -> Self {
        self.rules.insert(name.into(), setting.into());
        self
    }

    /// Sets the upstream inventory
    pub fn with_from_js<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from_js = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the names retired upstream
    pub fn with_from_js_deprecated<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from_js_deprecated = names.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a source from TOML content
    ///
    /// `origin` names the content in error messages (a path or a built-in
    /// name).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the content is not valid TOML or does
    /// not have the source layout.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: SourceFile = toml::from_str(content).map_err(|e| CatalogError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let meta = file.source;
        if meta.name.trim().is_empty() {
            return Err(CatalogError::Parse {
                origin: origin.to_string(),
                message: "source name must not be empty".to_string(),
            });
        }

        Ok(Self {
            name: meta.name,
            prefix: meta.prefix,
            version: meta.version,
            updated: meta.updated,
            rules: file.rules,
            from_js: meta.from_js,
            from_js_deprecated: meta.from_js_deprecated,
        })
    }

    /// Load a source from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Parse` if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// Upstream package version the inventories were taken from
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Date the inventories were last refreshed
    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    /// Configured rules keyed by unprefixed name, in authoring order
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn from_js(&self) -> &[String] {
        &self.from_js
    }

    pub fn from_js_deprecated(&self) -> &[String] {
        &self.from_js_deprecated
    }

    /// Applies this source's prefix to a rule name
    pub fn prefixed(&self, name: &str) -> String {
        self.prefix.apply(name)
    }

    /// Iterate over `(prefixed name, setting)` pairs in authoring order
    pub fn prefixed_rules(&self) -> impl Iterator<Item = (String, &RuleSetting)> {
        self.rules
            .iter()
            .map(|(name, setting)| (self.prefix.apply(name), setting))
    }

    /// Returns the first adjacent pair of rule names that is out of
    /// ascending order, if any
    pub fn first_unsorted_pair(&self) -> Option<(&str, &str)> {
        let names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names
            .windows(2)
            .find(|pair| pair[0] > pair[1])
            .map(|pair| (pair[0], pair[1]))
    }

    /// Whether the rule names are in ascending byte-wise order
    pub fn is_sorted(&self) -> bool {
        self.first_unsorted_pair().is_none()
    }
}
