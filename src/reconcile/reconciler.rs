#![forbid(unsafe_code)]

//! Consistency check between configured rules and upstream inventories
//!
//! Every prefixed rule configured by any source starts out as unclaimed.
//! Each name in each source's `from_js` list claims one entry. A claim that
//! finds nothing is either a missing rule (never configured) or a
//! duplicate (configured, but already claimed). Entries nobody claimed are
//! extraneous, and are split by whether some source lists them as
//! deprecated.

use crate::catalog::RuleSource;
use crate::reconcile::{Finding, FindingKind, Report};
use std::collections::{BTreeMap, HashSet};

/// Validate every source and collect all findings
///
/// Validation is global: it always runs over the full collection, not just
/// the sources of one profile. No check short-circuits another.
pub fn validate_and_report(sources: &[RuleSource]) -> Report {
    let mut findings = Vec::new();

    // Prefixed name -> source that configures it
    let mut unclaimed: BTreeMap<String, &str> = BTreeMap::new();
    for source in sources {
        for name in source.rules().keys() {
            unclaimed.insert(source.prefixed(name), source.name());
        }
    }

    let mut missing: BTreeMap<String, &str> = BTreeMap::new();
    let mut duplicates: BTreeMap<String, &str> = BTreeMap::new();

    for source in sources {
        if let Some((before, after)) = source.first_unsorted_pair() {
            findings.push(
                Finding::new(FindingKind::NotSorted, source.name(), source.name())
                    .with_detail(format!("'{}' comes before '{}'", before, after)),
            );
        }

        for name in source.from_js() {
            let prefixed = source.prefixed(name);
            if unclaimed.remove(&prefixed).is_some() {
                continue;
            }
            if source.rules().contains_key(name) {
                duplicates.insert(prefixed, source.name());
            } else {
                missing.insert(prefixed, source.name());
            }
        }
    }

    findings.extend(
        missing
            .into_iter()
            .map(|(name, source)| Finding::new(FindingKind::Missing, source, name)),
    );
    findings.extend(
        duplicates
            .into_iter()
            .map(|(name, source)| Finding::new(FindingKind::DuplicateInFromJs, source, name)),
    );

    if !unclaimed.is_empty() {
        let deprecated: HashSet<String> = sources
            .iter()
            .flat_map(|source| {
                source
                    .from_js_deprecated()
                    .iter()
                    .map(|name| source.prefixed(name))
            })
            .collect();

        for (name, source) in unclaimed {
            let kind = if deprecated.contains(&name) {
                FindingKind::DeprecatedPresent
            } else {
                FindingKind::UnknownExtraneous
            };
            findings.push(Finding::new(kind, source, name));
        }
    }

    let report = Report::new(findings);
    if report.is_empty() {
        tracing::debug!(sources = sources.len(), "catalog is consistent");
    } else {
        tracing::debug!(
            sources = sources.len(),
            findings = report.len(),
            "catalog has authoring problems"
        );
    }
    report
}
