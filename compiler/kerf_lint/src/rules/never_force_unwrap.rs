//! `NeverForceUnwrap`: flags postfix `!` on expressions.
//!
//! Only the outermost unwrap of a chain like `a!!` is reported.

use kerf_ir::{SyntaxKind, SyntaxNode};

use crate::rule::{LintRule, Rule, RuleContext, VisitAction};

pub struct NeverForceUnwrap;

impl Rule for NeverForceUnwrap {
    const NAME: &'static str = "NeverForceUnwrap";
    const OPT_IN: bool = true;
    const KINDS: &'static [SyntaxKind] = &[SyntaxKind::ForceUnwrapExpr];
}

impl LintRule for NeverForceUnwrap {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        let base = node
            .child_nodes()
            .next()
            .map(SyntaxNode::trimmed_text)
            .unwrap_or_default();
        cx.diagnose_at_node(node, format!("do not force unwrap '{base}'"));
        VisitAction::SkipChildren
    }
}
