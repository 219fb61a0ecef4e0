//! Per-rule line ranges switched on or off by comment directives.
//!
//! # Directives
//!
//! ```text
//! // kerf-disable: NeverForceUnwrap
//! let x = y!
//! // kerf-enable: NeverForceUnwrap
//!
//! // kerf-disable: DoNotUseSemicolons, NoParensAroundConditions
//! ```
//!
//! A directive is a line comment alone on its line. Comments after code on
//! the same line are never directives, and neither are doc or block
//! comments.
//!
//! # Pairing
//!
//! Each rule has at most one open block. A directive of the opposite kind
//! closes it and records the range `[open line, directive line)`; a
//! directive of the same kind is ignored. With nothing open, a directive
//! opens a block of its own kind. Blocks still open at the end of the file
//! close after the last line.

use kerf_diagnostic::span_utils::LineOffsetTable;
use kerf_ir::{SyntaxNode, Token, TriviaPiece};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Directive keyword that switches rules off.
pub const DISABLE_DIRECTIVE: &str = "kerf-disable:";

/// Directive keyword that switches rules on.
pub const ENABLE_DIRECTIVE: &str = "kerf-enable:";

/// Override state of a rule at a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleState {
    /// No directive applies; configuration decides.
    Default,
    Enabled,
    Disabled,
}

/// Half-open range of 1-based lines with a forced state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
    pub state: RuleState,
}

impl LineRange {
    #[inline]
    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line < self.end
    }
}

/// Rule name to sorted, disjoint line ranges. Built once per file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnablementMask {
    ranges: FxHashMap<String, Vec<LineRange>>,
}

impl EnablementMask {
    /// Scan the comments of `tree` for directives.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(tree: &SyntaxNode, lines: &LineOffsetTable) -> Self {
        let mut builder = MaskBuilder::default();
        for (index, token) in tree.tokens().enumerate() {
            let Some(full_start) = token.full_start() else {
                continue;
            };
            for (offset, comment) in lone_line_comments(token, index == 0) {
                let Some(directive) = Directive::parse(comment) else {
                    continue;
                };
                let line = lines.line_from_offset(full_start.saturating_add(offset));
                tracing::trace!(line, ?directive, "directive");
                for rule in &directive.rules {
                    builder.apply(rule, directive.state, line);
                }
            }
        }
        let mask = builder.finish(lines.last_line());
        tracing::debug!(rules = mask.ranges.len(), "built enablement mask");
        mask
    }

    /// State of `rule` at `line`.
    pub fn state(&self, rule: &str, line: u32) -> RuleState {
        let Some(ranges) = self.ranges.get(rule) else {
            return RuleState::Default;
        };
        let after = ranges.partition_point(|range| range.start <= line);
        after
            .checked_sub(1)
            .and_then(|index| ranges.get(index))
            .filter(|range| range.contains(line))
            .map_or(RuleState::Default, |range| range.state)
    }

    /// Ranges recorded for `rule`, in line order.
    pub fn ranges(&self, rule: &str) -> &[LineRange] {
        self.ranges.get(rule).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Line comments in `token`'s leading trivia that start their line, paired
/// with their offset from the start of that trivia.
fn lone_line_comments(token: &Token, is_first_token: bool) -> SmallVec<[(u32, &str); 2]> {
    let mut found = SmallVec::new();
    let mut at_line_start = is_first_token;
    for (offset, piece) in token.leading_trivia.pieces_with_offsets() {
        match piece {
            TriviaPiece::Spaces(_) | TriviaPiece::Tabs(_) => {}
            _ if piece.is_newline() => at_line_start = true,
            TriviaPiece::LineComment(text) => {
                if at_line_start {
                    found.push((u32::try_from(offset).unwrap_or(u32::MAX), text.as_str()));
                }
                at_line_start = false;
            }
            _ => at_line_start = false,
        }
    }
    found
}

#[derive(Debug)]
struct Directive<'a> {
    state: RuleState,
    rules: SmallVec<[&'a str; 2]>,
}

impl<'a> Directive<'a> {
    /// Parse `// kerf-disable: A, B` style comments. Anything else is `None`.
    fn parse(comment: &'a str) -> Option<Self> {
        let body = comment.strip_prefix("//")?.trim_start();
        let (state, list) = if let Some(list) = body.strip_prefix(DISABLE_DIRECTIVE) {
            (RuleState::Disabled, list)
        } else if let Some(list) = body.strip_prefix(ENABLE_DIRECTIVE) {
            (RuleState::Enabled, list)
        } else {
            return None;
        };
        let rules: SmallVec<[&str; 2]> = list
            .split(',')
            .filter_map(|entry| entry.split_whitespace().next())
            .collect();
        if rules.is_empty() {
            return None;
        }
        Some(Directive { state, rules })
    }
}

#[derive(Default)]
struct MaskBuilder {
    /// Open block per rule: its state and the line it opened on.
    open: FxHashMap<String, (RuleState, u32)>,
    ranges: FxHashMap<String, Vec<LineRange>>,
}

impl MaskBuilder {
    fn apply(&mut self, rule: &str, state: RuleState, line: u32) {
        match self.open.get(rule).copied() {
            Some((open_state, _)) if open_state == state => {}
            Some((open_state, start)) => {
                self.open.remove(rule);
                self.record(rule.to_string(), start, line, open_state);
            }
            None => {
                self.open.insert(rule.to_string(), (state, line));
            }
        }
    }

    fn record(&mut self, rule: String, start: u32, end: u32, state: RuleState) {
        self.ranges
            .entry(rule)
            .or_default()
            .push(LineRange { start, end, state });
    }

    fn finish(mut self, last_line: u32) -> EnablementMask {
        let open = std::mem::take(&mut self.open);
        for (rule, (state, start)) in open {
            self.record(rule, start, last_line.saturating_add(1), state);
        }
        EnablementMask {
            ranges: self.ranges,
        }
    }
}
