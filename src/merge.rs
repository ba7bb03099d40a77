#![forbid(unsafe_code)]

//! Merging rule sources into one flat rule table and building the output
//! document for a profile

use crate::catalog::{Catalog, Profile, RuleSource};
use crate::error::CatalogError;
use crate::types::RuleTable;
use serde_json::{Map, Value};

/// Key the merged rules are written to in the output document
pub const RULES_KEY: &str = "rules";

/// Merge the selected sources into one prefixed rule table
///
/// Sources are applied in `selected` order; on a prefixed-name collision
/// the later source wins. Nothing is validated here beyond the source
/// names themselves.
///
/// # Errors
///
/// Returns `CatalogError::NoSuchSource` if a selected name matches no
/// source.
pub fn merge<S: AsRef<str>>(
    sources: &[RuleSource],
    selected: &[S],
) -> Result<RuleTable, CatalogError> {
    let mut merged = RuleTable::new();

    for name in selected {
        let name = name.as_ref();
        let source = sources
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| CatalogError::NoSuchSource(name.to_string()))?;

        for (prefixed, setting) in source.prefixed_rules() {
            if let Some(previous) = merged.insert(prefixed.clone(), setting.clone())
                && previous != *setting
            {
                tracing::debug!(
                    rule = %prefixed,
                    source = source.name(),
                    "rule setting overwritten by later source"
                );
            }
        }
    }

    Ok(merged)
}

/// Build the output document for a profile
///
/// The result is the profile's base skeleton with its `rules` key set to
/// the merged rule table. A `rules` key already in the skeleton keeps its
/// position and has its value replaced.
///
/// # Errors
///
/// Returns `CatalogError::UnknownSource` if the profile selects a source
/// the catalog does not hold.
pub fn build_document(
    catalog: &Catalog,
    profile: &Profile,
) -> Result<Map<String, Value>, CatalogError> {
    let rules = merge(catalog.sources(), profile.sources()).map_err(|e| match e {
        CatalogError::NoSuchSource(source_name) => CatalogError::UnknownSource {
            profile: profile.name().to_string(),
            source_name,
        },
        other => other,
    })?;

    tracing::info!(
        profile = profile.name(),
        rules = rules.len(),
        "built document"
    );

    let mut document = profile.base().clone();
    document.insert(RULES_KEY.to_string(), Value::Object(rules));
    Ok(document)
}
