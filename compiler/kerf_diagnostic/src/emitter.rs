//! Delivering findings to whoever collects them.

use crate::Finding;

/// Receives findings as they are produced.
///
/// One sink belongs to one file's processing. Nothing here synchronizes, so a
/// caller that fans one file out across threads has to serialize emission.
pub trait FindingSink {
    fn consume(&mut self, finding: Finding);
}

impl FindingSink for Vec<Finding> {
    fn consume(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Forwards findings to an optional sink.
///
/// Without a sink, findings are dropped; this is how a formatting run that
/// has no one listening skips diagnostics.
pub struct FindingEmitter<'a> {
    sink: Option<&'a mut dyn FindingSink>,
    emitted: usize,
}

impl<'a> FindingEmitter<'a> {
    pub fn new(sink: &'a mut dyn FindingSink) -> Self {
        FindingEmitter {
            sink: Some(sink),
            emitted: 0,
        }
    }

    /// An emitter that drops everything.
    pub fn silent() -> Self {
        FindingEmitter {
            sink: None,
            emitted: 0,
        }
    }

    pub fn emit(&mut self, finding: Finding) {
        if let Some(sink) = self.sink.as_mut() {
            sink.consume(finding);
            self.emitted += 1;
        }
    }

    /// Number of findings delivered so far.
    pub fn emitted_count(&self) -> usize {
        self.emitted
    }
}
