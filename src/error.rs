//! Error types for eslintrc-gen
//!
//! Catalog problems (unreadable or malformed files, dangling references)
//! and usage problems are errors. Authoring problems found by the
//! reconciler are not errors in this sense: they are collected into a
//! [`Report`](crate::reconcile::Report) so they can all be shown at once.

use std::path::PathBuf;

/// Catalog loading and lookup errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A catalog file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid TOML or does not match the catalog schema
    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// Two entries with the same name inside one catalog layer
    #[error("Duplicate {kind} '{name}' in {origin}")]
    Duplicate {
        kind: &'static str,
        name: String,
        origin: String,
    },

    /// A merge request named a source that does not exist
    #[error("Unknown rule source '{0}'")]
    NoSuchSource(String),

    /// A profile names a source that does not exist
    #[error("Profile '{profile}' references unknown source '{source_name}'")]
    UnknownSource {
        profile: String,
        source_name: String,
    },

    /// A catalog path exists but is not a directory
    #[error("Catalog path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Invocation errors
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// No profile given
    #[error("No profile given. Usage: {program} {{ {} }}", .available.join(" | "))]
    MissingProfile {
        program: String,
        available: Vec<String>,
    },

    /// Profile name not in the catalog
    #[error("Unknown profile '{name}'. Usage: {program} {{ {} }}", .available.join(" | "))]
    UnknownProfile {
        name: String,
        program: String,
        available: Vec<String>,
    },
}

/// Top-level error type for eslintrc-gen
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Usage error
    #[error("{0}")]
    Usage(#[from] UsageError),

    /// Document could not be serialized
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_lists_available() {
        let err = UsageError::MissingProfile {
            program: "eslintrc-gen".to_string(),
            available: vec!["svelte".to_string(), "typescript-node".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No profile given. Usage: eslintrc-gen { svelte | typescript-node }"
        );
    }

    #[test]
    fn test_unknown_profile_message() {
        let err = UsageError::UnknownProfile {
            name: "react".to_string(),
            program: "eslintrc-gen".to_string(),
            available: vec!["svelte".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown profile 'react'. Usage: eslintrc-gen { svelte }"
        );
    }

    #[test]
    fn test_catalog_error_wraps_into_gen_error() {
        let err: GenError = CatalogError::UnknownSource {
            profile: "svelte".to_string(),
            source_name: "vue".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Catalog error: Profile 'svelte' references unknown source 'vue'"
        );
    }
}
