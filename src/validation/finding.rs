//! Diagnostic findings.
//!
//! This module provides the [`Finding`] type for representing issues found
//! during validation, plus the [`Severity`] and [`Category`] classifications
//! attached to each one.

/// Severity level for validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Value combination that will be silently coerced or ignored downstream.
    Warning,
    /// Semantic value invalid by policy; validation continues.
    Error,
    /// The document cannot be processed at all; validation aborts.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Report-grouping label for a finding.
///
/// Categories only affect report layout, never control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Findings that abort the run.
    Critical,
    /// Network-wide settings.
    General,
    /// Orderer configuration.
    Orderer,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Critical => write!(f, "Critical"),
            Category::General => write!(f, "General"),
            Category::Orderer => write!(f, "Orderer"),
        }
    }
}

/// A single diagnostic record produced by a validation rule.
///
/// Immutable once created: a finding is either rendered directly (critical
/// path) or buffered by a collector until the reporter reads it.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Severity of this finding.
    pub severity: Severity,
    /// Report-grouping label.
    pub category: Category,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Create a new finding.
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
        }
    }
}
