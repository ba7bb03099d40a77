#![forbid(unsafe_code)]

//! Catalog of rule sources and profiles
//!
//! The Catalog is responsible for:
//! - Loading the embedded built-in sources and profiles
//! - Layering a catalog directory from disk over them
//! - Checking that every profile only selects known sources
//! - Providing ordered access to sources and profiles by name

use crate::catalog::{Profile, RuleSource, builtin};
use crate::error::CatalogError;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered, name-unique collection of sources and profiles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sources: Vec<RuleSource>,
    profiles: Vec<Profile>,
}

impl Catalog {
    /// Create a new empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from explicit sources and profiles
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Duplicate` if two sources or two profiles share
    /// a name, and `CatalogError::UnknownSource` if a profile selects a
    /// source that is not present.
    pub fn from_parts(
        sources: Vec<RuleSource>,
        profiles: Vec<Profile>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_layer(sources, profiles, "catalog")?;
        catalog.check_references()?;
        Ok(catalog)
    }

    /// Load the embedded built-in catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an embedded file is malformed or a built-in
    /// profile references an unknown source.
    pub fn builtin() -> Result<Self, CatalogError> {
        let sources = builtin::load_builtin_sources()?;
        let profiles = builtin::load_builtin_profiles()?;
        tracing::debug!(
            sources = sources.len(),
            profiles = profiles.len(),
            "loaded built-in catalog"
        );

        let mut catalog = Self::new();
        catalog.extend_layer(sources, profiles, "built-in catalog")?;
        catalog.check_references()?;
        Ok(catalog)
    }

    /// Load the built-in catalog and layer an optional directory over it
    ///
    /// # Errors
    ///
    /// See [`Catalog::builtin`] and [`Catalog::layer_dir`].
    pub fn load(catalog_dir: Option<&Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin()?;
        if let Some(dir) = catalog_dir {
            catalog.layer_dir(dir)?;
        }
        Ok(catalog)
    }

    /// Layer a catalog directory over this catalog
    ///
    /// Reads every `.toml` file in `<dir>/sources` and `<dir>/profiles`
    /// (either may be absent) in file-name order. An entry whose name is
    /// already present replaces the existing one in place; new entries are
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a file cannot be read or parsed, if the
    /// directory holds two entries with the same name, or if any profile
    /// ends up referencing an unknown source.
    pub fn layer_dir(&mut self, dir: &Path) -> Result<(), CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::NotADirectory(dir.to_path_buf()));
        }

        let sources = toml_files(&dir.join("sources"))?
            .iter()
            .map(|path| RuleSource::from_path(path))
            .collect::<Result<Vec<_>, _>>()?;
        let profiles = toml_files(&dir.join("profiles"))?
            .iter()
            .map(|path| Profile::from_path(path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            dir = %dir.display(),
            sources = sources.len(),
            profiles = profiles.len(),
            "layering catalog directory"
        );

        self.extend_layer(sources, profiles, &dir.display().to_string())?;
        self.check_references()
    }

    /// Add one layer of entries, rejecting duplicates within the layer
    fn extend_layer(
        &mut self,
        sources: Vec<RuleSource>,
        profiles: Vec<Profile>,
        origin: &str,
    ) -> Result<(), CatalogError> {
        let mut seen: Vec<String> = Vec::new();
        for source in sources {
            if seen.iter().any(|name| name == source.name()) {
                return Err(CatalogError::Duplicate {
                    kind: "source",
                    name: source.name().to_string(),
                    origin: origin.to_string(),
                });
            }
            seen.push(source.name().to_string());
            self.upsert_source(source);
        }

        seen.clear();
        for profile in profiles {
            if seen.iter().any(|name| name == profile.name()) {
                return Err(CatalogError::Duplicate {
                    kind: "profile",
                    name: profile.name().to_string(),
                    origin: origin.to_string(),
                });
            }
            seen.push(profile.name().to_string());
            self.upsert_profile(profile);
        }

        Ok(())
    }

    fn upsert_source(&mut self, source: RuleSource) {
        match self.sources.iter_mut().find(|s| s.name() == source.name()) {
            Some(existing) => {
                tracing::debug!(source = source.name(), "replacing rule source");
                *existing = source;
            }
            None => self.sources.push(source),
        }
    }

    fn upsert_profile(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name() == profile.name()) {
            Some(existing) => {
                tracing::debug!(profile = profile.name(), "replacing profile");
                *existing = profile;
            }
            None => self.profiles.push(profile),
        }
    }

    /// Ensure every profile only selects sources in this catalog
    fn check_references(&self) -> Result<(), CatalogError> {
        for profile in &self.profiles {
            for name in profile.sources() {
                if self.source(name).is_none() {
                    return Err(CatalogError::UnknownSource {
                        profile: profile.name().to_string(),
                        source_name: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// All sources, in catalog order
    pub fn sources(&self) -> &[RuleSource] {
        &self.sources
    }

    /// All profiles, in catalog order
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Get a source by name
    pub fn source(&self, name: &str) -> Option<&RuleSource> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// Get a profile by name
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    /// Profile names, in catalog order
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name().to_string()).collect()
    }
}

/// List the `.toml` files in a directory, sorted by file name
///
/// A missing directory yields an empty list.
fn toml_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "catalog subdirectory not present");
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(CatalogError::NotADirectory(dir.to_path_buf()));
    }

    let io_error = |source: std::io::Error| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prefix;
    use serde_json::Map;

    fn source(name: &str) -> RuleSource {
        RuleSource::new(name, Prefix::none())
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().expect("built-in catalog should load");
        let names: Vec<&str> = catalog.sources().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["eslint", "svelte", "typescript-eslint"]);
        assert_eq!(catalog.profile_names(), vec!["svelte", "typescript-node"]);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.source("svelte").is_some());
        assert!(catalog.source("vue").is_none());
        assert!(catalog.profile("typescript-node").is_some());
        assert!(catalog.profile("react").is_none());
    }

    #[test]
    fn test_from_parts_rejects_duplicate_source() {
        let err = Catalog::from_parts(vec![source("a"), source("a")], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate { kind: "source", .. }));
    }

    #[test]
    fn test_from_parts_rejects_dangling_profile() {
        let profile = Profile::new("p", ["a", "missing"], Map::new());
        let err = Catalog::from_parts(vec![source("a")], vec![profile]).unwrap_err();
        match err {
            CatalogError::UnknownSource {
                profile,
                source_name,
            } => {
                assert_eq!(profile, "p");
                assert_eq!(source_name, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_later_layer_replaces_in_place() {
        let mut catalog =
            Catalog::from_parts(vec![source("a"), source("b"), source("c")], vec![]).unwrap();
        let replacement = RuleSource::new("b", Prefix::new("bee").unwrap());
        catalog
            .extend_layer(vec![replacement, source("d")], vec![], "override")
            .unwrap();

        let names: Vec<&str> = catalog.sources().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert_eq!(catalog.source("b").unwrap().prefix().as_str(), "bee");
    }

    #[test]
    fn test_layer_dir_rejects_missing_dir() {
        let mut catalog = Catalog::new();
        let err = catalog
            .layer_dir(Path::new("/nonexistent/catalog"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotADirectory(_)));
    }

    #[test]
    fn test_toml_files_missing_dir_is_empty() {
        let files = toml_files(Path::new("/nonexistent/catalog/sources")).unwrap();
        assert!(files.is_empty());
    }
}
