#![forbid(unsafe_code)]

//! Built-in catalog embedded at compile time
//!
//! The rule sources and profiles under `builtin-catalog/` are compiled into
//! the binary using `include_str!`, so the generator runs without any files
//! next to it.

use crate::catalog::{Profile, RuleSource};
use crate::error::CatalogError;

/// Embedded built-in rule sources, in validation order
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    (
        "eslint",
        include_str!("../../builtin-catalog/sources/eslint.toml"),
    ),
    (
        "svelte",
        include_str!("../../builtin-catalog/sources/svelte.toml"),
    ),
    (
        "typescript-eslint",
        include_str!("../../builtin-catalog/sources/typescript-eslint.toml"),
    ),
];

/// Embedded built-in profiles
const BUILTIN_PROFILES: &[(&str, &str)] = &[
    (
        "svelte",
        include_str!("../../builtin-catalog/profiles/svelte.toml"),
    ),
    (
        "typescript-node",
        include_str!("../../builtin-catalog/profiles/typescript-node.toml"),
    ),
];

/// Load all built-in rule sources from embedded resources
///
/// # Errors
///
/// Returns `CatalogError::Parse` if an embedded file is malformed.
pub fn load_builtin_sources() -> Result<Vec<RuleSource>, CatalogError> {
    BUILTIN_SOURCES
        .iter()
        .map(|(name, content)| RuleSource::from_toml(content, &format!("built-in source '{}'", name)))
        .collect()
}

/// Load all built-in profiles from embedded resources
///
/// # Errors
///
/// Returns `CatalogError::Parse` if an embedded file is malformed.
pub fn load_builtin_profiles() -> Result<Vec<Profile>, CatalogError> {
    BUILTIN_PROFILES
        .iter()
        .map(|(name, content)| Profile::from_toml(content, &format!("built-in profile '{}'", name)))
        .collect()
}
