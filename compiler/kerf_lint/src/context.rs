//! Per-file state shared by the pipelines and the whitespace linter.

use kerf_diagnostic::span_utils::LineOffsetTable;
use kerf_diagnostic::{Finding, FindingEmitter, FindingSink, Location};
use kerf_ir::SyntaxNode;

use crate::config::Configuration;
use crate::mask::{EnablementMask, RuleState};

/// Everything a pass over one file needs: configuration, the file's
/// directive mask and line table, and where findings go.
///
/// A context lives for one file and is passed by reference into each pass.
pub struct Context<'a> {
    configuration: &'a Configuration,
    source: &'a str,
    lines: LineOffsetTable,
    mask: EnablementMask,
    emitter: FindingEmitter<'a>,
}

impl<'a> Context<'a> {
    /// Context for linting `tree`, parsed from `source`.
    pub fn new(
        configuration: &'a Configuration,
        source: &'a str,
        tree: &SyntaxNode,
        sink: &'a mut dyn FindingSink,
    ) -> Self {
        Self::build(configuration, source, tree, FindingEmitter::new(sink))
    }

    /// Context for formatting: directives apply, findings are dropped.
    pub fn without_sink(configuration: &'a Configuration, source: &'a str, tree: &SyntaxNode) -> Self {
        Self::build(configuration, source, tree, FindingEmitter::silent())
    }

    /// Context for comparing text alone, with no tree and so no directives.
    pub fn for_text(
        configuration: &'a Configuration,
        source: &'a str,
        sink: &'a mut dyn FindingSink,
    ) -> Self {
        Context {
            configuration,
            source,
            lines: LineOffsetTable::build(source),
            mask: EnablementMask::default(),
            emitter: FindingEmitter::new(sink),
        }
    }

    fn build(
        configuration: &'a Configuration,
        source: &'a str,
        tree: &SyntaxNode,
        emitter: FindingEmitter<'a>,
    ) -> Self {
        let lines = LineOffsetTable::build(source);
        let mask = EnablementMask::build(tree, &lines);
        Context {
            configuration,
            source,
            lines,
            mask,
            emitter,
        }
    }

    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    /// The text the tree was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn lines(&self) -> &LineOffsetTable {
        &self.lines
    }

    pub fn mask(&self) -> &EnablementMask {
        &self.mask
    }

    #[inline]
    pub fn line_of(&self, offset: u32) -> u32 {
        self.lines.line_from_offset(offset)
    }

    /// 1-based line and character column of `offset` in the source.
    pub fn location_of(&self, offset: u32) -> Location {
        let (line, column) = self.lines.offset_to_line_col(self.source, offset);
        Location::new(line, column)
    }

    /// Whether a rule runs at `line`: a directive wins, then configuration,
    /// then the rule's own default.
    pub fn is_rule_enabled(&self, name: &str, opt_in: bool, line: u32) -> bool {
        match self.mask.state(name, line) {
            RuleState::Enabled => true,
            RuleState::Disabled => false,
            RuleState::Default => self.configuration.is_rule_enabled(name, opt_in),
        }
    }

    pub fn emit(&mut self, finding: Finding) {
        self.emitter.emit(finding);
    }

    pub fn emitted_count(&self) -> usize {
        self.emitter.emitted_count()
    }
}
