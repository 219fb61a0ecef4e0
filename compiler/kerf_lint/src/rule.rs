//! What a rule is.
//!
//! Rules are stateless unit structs. A lint rule inspects nodes of the kinds
//! it names and reports findings; a format rule is a lint rule that can also
//! rewrite those nodes. The lint half of a format rule reports what the
//! rewrite would change.

use kerf_diagnostic::{Finding, FindingCategory};
use kerf_ir::{SyntaxKind, SyntaxNode, Token};

use crate::config::Configuration;
use crate::context::Context;

/// Whether the lint walk should show this rule the current node's
/// descendants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisitAction {
    Continue,
    /// Stop visiting this rule below the current node. Other rules are
    /// unaffected.
    SkipChildren,
}

/// Identity and interest of a rule.
pub trait Rule {
    /// Name used in configuration, directives, and findings.
    const NAME: &'static str;

    /// Opt-in rules are off unless configuration or a directive turns them on.
    const OPT_IN: bool = false;

    /// Node kinds the rule is called for.
    const KINDS: &'static [SyntaxKind];
}

pub trait LintRule: Rule {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction;
}

pub trait FormatRule: LintRule {
    /// Return `node` rewritten, or unchanged. Must only move or drop
    /// whitespace and tokens; trivia carrying comments is kept.
    fn rewrite(node: SyntaxNode, cx: &Context<'_>) -> SyntaxNode;
}

/// What a rule sees of the file while it inspects a node.
pub struct RuleContext<'c, 'a> {
    cx: &'c mut Context<'a>,
    rule: &'static str,
}

impl<'c, 'a> RuleContext<'c, 'a> {
    pub(crate) fn new(cx: &'c mut Context<'a>, rule: &'static str) -> Self {
        RuleContext { cx, rule }
    }

    pub fn configuration(&self) -> &Configuration {
        self.cx.configuration()
    }

    /// Report a finding for the current rule at a source offset.
    pub fn diagnose(&mut self, message: impl Into<String>, offset: Option<u32>) {
        let mut finding = Finding::new(FindingCategory::Rule(self.rule), message);
        if let Some(offset) = offset {
            finding = finding.with_location(self.cx.location_of(offset));
        }
        self.cx.emit(finding);
    }

    /// Report at the start of `node`'s first token.
    pub fn diagnose_at_node(&mut self, node: &SyntaxNode, message: impl Into<String>) {
        self.diagnose(message, node.start_offset());
    }

    pub fn diagnose_at_token(&mut self, token: &Token, message: impl Into<String>) {
        self.diagnose(message, token.source_offset);
    }
}
