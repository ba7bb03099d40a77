#![forbid(unsafe_code)]

//! Profile definitions
//!
//! A profile picks the rule sources to merge, in order, and carries the
//! skeleton document the merged rules are written into.

use crate::error::CatalogError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A named configuration target
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    description: Option<String>,
    sources: Vec<String>,
    base: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFile {
    profile: ProfileMeta,
    #[serde(default)]
    base: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileMeta {
    name: String,
    description: Option<String>,
    sources: Vec<String>,
}

impl Profile {
    pub fn new<I, S>(name: impl Into<String>, sources: I, base: Map<String, Value>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            sources: sources.into_iter().map(Into::into).collect(),
            base,
        }
    }

    /// Parse a profile from TOML content
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the content is malformed, names no
    /// sources, or names the same source twice.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: ProfileFile = toml::from_str(content).map_err(|e| CatalogError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let meta = file.profile;
        let parse_error = |message: String| CatalogError::Parse {
            origin: origin.to_string(),
            message,
        };

        if meta.name.trim().is_empty() {
            return Err(parse_error("profile name must not be empty".to_string()));
        }
        if meta.sources.is_empty() {
            return Err(parse_error(format!(
                "profile '{}' does not select any sources",
                meta.name
            )));
        }
        for (i, source) in meta.sources.iter().enumerate() {
            if meta.sources[..i].contains(source) {
                return Err(parse_error(format!(
                    "profile '{}' selects source '{}' more than once",
                    meta.name, source
                )));
            }
        }

        Ok(Self {
            name: meta.name,
            description: meta.description,
            sources: meta.sources,
            base: file.base,
        })
    }

    /// Load a profile from a TOML file
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

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Names of the sources to merge, in merge order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Skeleton document, without the merged rules
    pub fn base(&self) -> &Map<String, Value> {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NODE_LIKE: &str = r#"
[profile]
name = "typescript-node"
description = "TypeScript on Node.js"
sources = ["eslint", "typescript-eslint"]

[base]
env = { node = true }
overrides = [{ files = ["*.ts"] }]
parser = "@typescript-eslint/parser"
root = true
"#;

    #[test]
    fn test_from_toml() {
        let profile = Profile::from_toml(NODE_LIKE, "test").unwrap();
        assert_eq!(profile.name(), "typescript-node");
        assert_eq!(profile.description(), Some("TypeScript on Node.js"));
        assert_eq!(profile.sources(), ["eslint", "typescript-eslint"]);
        assert_eq!(profile.base()["env"], json!({"node": true}));
        assert_eq!(profile.base()["overrides"], json!([{"files": ["*.ts"]}]));
    }

    #[test]
    fn test_base_keeps_authoring_order() {
        let profile = Profile::from_toml(NODE_LIKE, "test").unwrap();
        let keys: Vec<&str> = profile.base().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["env", "overrides", "parser", "root"]);
    }

    #[test]
    fn test_base_is_optional() {
        let content = r#"
[profile]
name = "minimal"
sources = ["eslint"]
"#;
        let profile = Profile::from_toml(content, "test").unwrap();
        assert!(profile.base().is_empty());
        assert_eq!(profile.description(), None);
    }

    #[test]
    fn test_rejects_empty_sources() {
        let content = r#"
[profile]
name = "empty"
sources = []
"#;
        let err = Profile::from_toml(content, "empty.toml").unwrap_err();
        assert!(err.to_string().contains("does not select any sources"));
    }

    #[test]
    fn test_rejects_repeated_source() {
        let content = r#"
[profile]
name = "twice"
sources = ["eslint", "svelte", "eslint"]
"#;
        let err = Profile::from_toml(content, "twice.toml").unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_rejects_missing_profile_table() {
        let content = r#"
[base]
root = true
"#;
        assert!(Profile::from_toml(content, "test").is_err());
    }
}
