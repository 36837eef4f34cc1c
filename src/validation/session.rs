//! Validation session: the rule sweep and severity dispatch.
//!
//! A [`ValidationSession`] owns a pair of fresh collectors, sweeps the rule
//! set in order, and routes every finding by severity: critical findings
//! abort the sweep synchronously (no later rule runs, no report is built),
//! everything else accumulates. The session is consumed by the run, so stale
//! findings can never bleed into a later report.

use crate::config::NetworkConfig;

use super::collector::Collector;
use super::finding::{Finding, Severity};
use super::rules::RuleSet;

/// Outcome of a validation run.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// All rules ran; collected findings are ready for reporting.
    Completed(ValidationReport),
    /// A critical finding aborted the sweep before later rules ran.
    Aborted(Finding),
}

/// Collected non-critical findings of one completed run.
#[derive(Debug)]
pub struct ValidationReport {
    errors: Collector,
    warnings: Collector,
}

impl ValidationReport {
    /// The error-severity collector.
    pub fn errors(&self) -> &Collector {
        &self.errors
    }

    /// The warning-severity collector.
    pub fn warnings(&self) -> &Collector {
        &self.warnings
    }

    /// Whether the run produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// A single validation run over one configuration document.
pub struct ValidationSession {
    errors: Collector,
    warnings: Collector,
}

impl ValidationSession {
    /// Create a session with fresh, empty collectors.
    pub fn new() -> Self {
        Self {
            errors: Collector::new(),
            warnings: Collector::new(),
        }
    }

    /// Sweep the rule set in order, dispatching findings by severity.
    ///
    /// Consumes the session: collectors live exactly as long as one run.
    pub fn run(mut self, rules: &RuleSet, config: &NetworkConfig) -> ValidationOutcome {
        for rule in rules.iter() {
            let Some(finding) = rule.check(config) else {
                continue;
            };
            tracing::debug!(rule = rule.id(), severity = %finding.severity, "rule fired");

            match finding.severity {
                Severity::Critical => return ValidationOutcome::Aborted(finding),
                Severity::Error => self.errors.append(finding),
                Severity::Warning => self.warnings.append(finding),
            }
        }

        ValidationOutcome::Completed(ValidationReport {
            errors: self.errors,
            warnings: self.warnings,
        })
    }
}

impl Default for ValidationSession {
    fn default() -> Self {
        Self::new()
    }
}
