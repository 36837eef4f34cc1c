//! Per-severity finding buffers.

use super::finding::Finding;

/// An ordered, append-only buffer of findings for one severity level.
///
/// Entries appear in the exact order their rules fired; there is no
/// reordering and no deduplication. A collector belongs to a single
/// validation session and is dropped with it, so findings can never leak
/// across runs.
#[derive(Debug, Default)]
pub struct Collector {
    findings: Vec<Finding>,
}

impl Collector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding, preserving insertion order.
    pub fn append(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Number of findings currently held.
    pub fn count(&self) -> usize {
        self.findings.len()
    }

    /// Whether the collector holds no findings.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// The held findings, in insertion order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}
