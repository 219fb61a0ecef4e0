//! `NoParensAroundConditions`: `if (x) {}` is written `if x {}`.
//!
//! Every redundant pair is removed, so `if ((x)) {}` also becomes `if x {}`.
//! Comments inside the parentheses move with the expression.

use kerf_ir::{SyntaxElement, SyntaxKind, SyntaxNode, Token, TokenKind, Trivia};

use crate::context::Context;
use crate::rule::{FormatRule, LintRule, Rule, RuleContext, VisitAction};

pub struct NoParensAroundConditions;

impl Rule for NoParensAroundConditions {
    const NAME: &'static str = "NoParensAroundConditions";
    const KINDS: &'static [SyntaxKind] = &[SyntaxKind::IfStmt];
}

impl LintRule for NoParensAroundConditions {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        if let Some(condition) = node.child_nodes().next() {
            if is_parenthesized(condition) {
                cx.diagnose_at_node(condition, "remove the parentheses around this expression");
            }
        }
        VisitAction::Continue
    }
}

impl FormatRule for NoParensAroundConditions {
    fn rewrite(node: SyntaxNode, _cx: &Context<'_>) -> SyntaxNode {
        let kind = node.kind();
        let mut children = node.into_children();
        let slot = children.iter_mut().find_map(|child| match child {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        });
        let Some(slot) = slot else {
            return SyntaxNode::new(kind, children);
        };

        let mut condition = std::mem::replace(slot, SyntaxNode::missing());
        let mut stripped = false;
        loop {
            match unwrap_parens(condition) {
                Ok(inner) => {
                    condition = inner;
                    stripped = true;
                }
                Err(unchanged) => {
                    condition = unchanged;
                    break;
                }
            }
        }
        *slot = condition;

        // `if(x)` needs a space once the parenthesis is gone.
        if stripped {
            if let Some(SyntaxElement::Token(keyword)) = children.first_mut() {
                if keyword.trailing_trivia.is_empty() {
                    keyword.trailing_trivia = Trivia::spaces(1);
                }
            }
        }
        SyntaxNode::new(kind, children)
    }
}

/// A tuple expression holding exactly one element and no trailing comma.
fn is_parenthesized(expr: &SyntaxNode) -> bool {
    expr.kind() == SyntaxKind::TupleExpr
        && matches!(
            expr.children(),
            [SyntaxElement::Token(left), SyntaxElement::Node(_), SyntaxElement::Token(right)]
                if left.kind == TokenKind::LeftParen && right.kind == TokenKind::RightParen
        )
}

/// The expression inside one pair of parentheses, or `expr` unchanged.
fn unwrap_parens(expr: SyntaxNode) -> Result<SyntaxNode, SyntaxNode> {
    if !is_parenthesized(&expr) {
        return Err(expr);
    }
    let kind = expr.kind();
    match <[SyntaxElement; 3]>::try_from(expr.into_children()) {
        Ok([SyntaxElement::Token(left), SyntaxElement::Node(inner), SyntaxElement::Token(right)]) => {
            Ok(with_paren_trivia(left, inner, right))
        }
        Ok(parts) => Err(SyntaxNode::new(kind, parts.into())),
        Err(children) => Err(SyntaxNode::new(kind, children)),
    }
}

/// `inner` dressed in the outer trivia of its parentheses. Whitespace just
/// inside the parentheses is dropped unless a comment is involved.
fn with_paren_trivia(left: Token, mut inner: SyntaxNode, right: Token) -> SyntaxNode {
    let inner_leading = inner.leading_trivia().cloned().unwrap_or_default();
    let inner_trailing = inner.trailing_trivia().cloned().unwrap_or_default();

    let mut leading = left.leading_trivia;
    if left.trailing_trivia.has_comments() || inner_leading.has_comments() {
        leading = leading
            .appending(left.trailing_trivia)
            .appending(inner_leading);
    }
    let trailing = if inner_trailing.has_comments() || right.leading_trivia.has_comments() {
        inner_trailing
            .appending(right.leading_trivia)
            .appending(right.trailing_trivia)
    } else {
        right.trailing_trivia
    };

    inner.set_leading_trivia(leading);
    inner.set_trailing_trivia(trailing);
    inner
}
