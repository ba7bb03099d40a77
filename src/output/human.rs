#![forbid(unsafe_code)]

//! Human-readable diagnostics for reconciliation findings
//!
//! Findings are grouped under one heading per category so a maintainer can
//! fix every problem from a single run.

use crate::reconcile::{Finding, FindingKind, Report};
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Human-readable formatter for findings
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format a report without color
    pub fn format(&self, report: &Report) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write_to(&mut out, report)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Write a report to any color-capable writer
    pub fn write_to<W: WriteColor>(&self, out: &mut W, report: &Report) -> io::Result<()> {
        if report.is_empty() {
            return Ok(());
        }

        let mut title = ColorSpec::new();
        title.set_fg(Some(Color::Red)).set_bold(true);
        out.set_color(&title)?;
        write!(out, "Some errors were found:")?;
        out.reset()?;
        writeln!(out)?;

        let mut heading = ColorSpec::new();
        heading.set_bold(true);

        for kind in report.kinds() {
            writeln!(out)?;
            write!(out, "- ")?;
            out.set_color(&heading)?;
            write!(out, "{}:", kind.heading())?;
            out.reset()?;
            writeln!(out)?;

            for finding in report.of_kind(kind) {
                writeln!(out, "  - {}", describe(finding))?;
            }
        }

        Ok(())
    }

    /// Write a report to stderr, coloring it if `choice` allows
    pub fn write_to_stderr(&self, report: &Report, choice: ColorChoice) -> io::Result<()> {
        let choice = match choice {
            ColorChoice::Auto if !io::stderr().is_terminal() => ColorChoice::Never,
            other => other,
        };
        let mut stderr = StandardStream::stderr(choice);
        self.write_to(&mut stderr, report)?;
        stderr.flush()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(finding: &Finding) -> String {
    match (finding.kind, &finding.detail) {
        (FindingKind::NotSorted, Some(detail)) => format!("{}: {}", finding.subject, detail),
        (FindingKind::NotSorted, None) => finding.subject.clone(),
        (_, Some(detail)) => format!("{} (in '{}': {})", finding.subject, finding.source, detail),
        (_, None) => format!("{} (in '{}')", finding.subject, finding.source),
    }
}
