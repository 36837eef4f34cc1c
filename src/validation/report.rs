//! Summary report rendering.
//!
//! Renders the grouped end-of-run summary (and the short critical-abort
//! output) as plain text to any [`Write`] sink. Terminal styling is applied
//! by the CLI layer, not here, so the rendered text is byte-stable across
//! environments and trivially testable.

use std::io::{self, Write};

use indexmap::IndexMap;

use super::finding::{Category, Finding};
use super::session::ValidationReport;

/// Opening line of the validation summary.
pub const SUMMARY_HEADER: &str = "========== Validation summary ==========";

/// Closing line of the validation summary.
pub const SUMMARY_FOOTER: &str = "========================================";

/// Caption printed above collected error findings.
pub const ERRORS_CAPTION: &str = "Errors found :";

/// Caption printed above collected warning findings.
pub const WARNINGS_CAPTION: &str = "Warnings found :";

/// Banner printed before a critical finding's message.
pub const CRITICAL_BANNER: &str = "Critical error occurred:";

/// Render the end-of-run summary for a completed validation run.
///
/// Counts come straight from the collectors; a severity with no findings
/// prints no caption. Within each block, findings are grouped by category in
/// the order categories first appeared, and messages keep insertion order.
pub fn render_summary<W: Write>(report: &ValidationReport, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{SUMMARY_HEADER}")?;
    writeln!(writer, "Errors count: {}", report.errors().count())?;
    writeln!(writer, "Warnings count: {}", report.warnings().count())?;

    render_block(report.errors().findings(), ERRORS_CAPTION, writer)?;
    render_block(report.warnings().findings(), WARNINGS_CAPTION, writer)?;

    writeln!(writer, "{SUMMARY_FOOTER}")
}

/// Render the two-line critical output: banner plus indented message.
pub fn render_critical<W: Write>(finding: &Finding, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{CRITICAL_BANNER}")?;
    writeln!(writer, "   {}", finding.message)
}

fn render_block<W: Write>(findings: &[Finding], caption: &str, writer: &mut W) -> io::Result<()> {
    if findings.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{caption}")?;

    // IndexMap keeps categories in first-seen order, which the report
    // contract requires.
    let mut grouped: IndexMap<Category, Vec<&Finding>> = IndexMap::new();
    for finding in findings {
        grouped.entry(finding.category).or_default().push(finding);
    }

    for (category, group) in &grouped {
        writeln!(writer, "  {category}:")?;
        for finding in group {
            writeln!(writer, "   - {}", finding.message)?;
        }
    }

    Ok(())
}
