//! Finding queue for collecting, sorting, and deduplicating findings.
//!
//! Rule findings arrive in tree order and whitespace findings arrive in text
//! order, so a file's combined stream is not sorted. The queue restores
//! source order on flush.

use crate::{emitter::FindingSink, Finding};

/// Collects findings and hands them back in source order.
///
/// # Example
///
/// ```text
/// let mut queue = FindingQueue::new();
/// linter.lint(&tree, source, &printer, &mut queue)?;
/// for finding in queue.flush() { ... }
/// ```
#[derive(Clone, Debug, Default)]
pub struct FindingQueue {
    findings: Vec<Finding>,
}

impl FindingQueue {
    pub fn new() -> Self {
        FindingQueue::default()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Take every queued finding, sorted by location.
    ///
    /// Findings without a location come first. The sort is stable, so
    /// findings at the same location keep their arrival order. Identical
    /// findings are reported once.
    pub fn flush(&mut self) -> Vec<Finding> {
        let mut findings = std::mem::take(&mut self.findings);
        findings.sort_by_key(|finding| finding.location);
        findings.dedup();
        findings
    }
}

impl FindingSink for FindingQueue {
    fn consume(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}
