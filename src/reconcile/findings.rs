#![forbid(unsafe_code)]

//! Findings produced by catalog reconciliation

use serde::Serialize;
use std::fmt;

/// Category of an authoring problem
///
/// Variants are declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A source's rules are not in ascending order
    NotSorted,
    /// Listed in `from_js` but not configured
    Missing,
    /// Listed in `from_js` more than once
    DuplicateInFromJs,
    /// Configured, not in `from_js`, but listed as deprecated upstream
    DeprecatedPresent,
    /// Configured but not known upstream at all
    UnknownExtraneous,
}

impl FindingKind {
    /// Every kind, in reporting order
    pub const ALL: [FindingKind; 5] = [
        FindingKind::NotSorted,
        FindingKind::Missing,
        FindingKind::DuplicateInFromJs,
        FindingKind::DeprecatedPresent,
        FindingKind::UnknownExtraneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::NotSorted => "not_sorted",
            FindingKind::Missing => "missing",
            FindingKind::DuplicateInFromJs => "duplicate_in_from_js",
            FindingKind::DeprecatedPresent => "deprecated_present",
            FindingKind::UnknownExtraneous => "unknown_extraneous",
        }
    }

    /// Heading used when findings are grouped for humans
    pub fn heading(&self) -> &'static str {
        match self {
            FindingKind::NotSorted => "Rules are not sorted correctly",
            FindingKind::Missing => "Some rules are missing",
            FindingKind::DuplicateInFromJs => "Some rules are duplicated in `from_js`",
            FindingKind::DeprecatedPresent => "Some deprecated rules were used",
            FindingKind::UnknownExtraneous => "Some rules were not found in any sources",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single authoring problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// Source the problem is attributed to
    pub source: String,
    /// Source name for `NotSorted`, prefixed rule name otherwise
    pub subject: String,
    /// Extra context, e.g. the first out-of-order pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Finding {
    pub fn new(kind: FindingKind, source: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            subject: subject.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// All findings from one reconciliation run, in reporting order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Build a report, ordering findings by kind while keeping the
    /// relative order within each kind
    pub fn new(mut findings: Vec<Finding>) -> Self {
        findings.sort_by_key(|finding| finding.kind);
        Self { findings }
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// True when no findings were produced
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one kind, in reporting order
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Subjects of one kind, in reporting order
    pub fn subjects(&self, kind: FindingKind) -> Vec<&str> {
        self.of_kind(kind).map(|f| f.subject.as_str()).collect()
    }

    /// Kinds that have at least one finding, in reporting order
    pub fn kinds(&self) -> Vec<FindingKind> {
        FindingKind::ALL
            .into_iter()
            .filter(|kind| self.of_kind(*kind).next().is_some())
            .collect()
    }
}
