//! `ReturnVoidInsteadOfEmptyTuple`: `-> ()` is written `-> Void`.

use kerf_ir::{SyntaxElement, SyntaxKind, SyntaxNode, Token, TokenKind};

use crate::context::Context;
use crate::rule::{FormatRule, LintRule, Rule, RuleContext, VisitAction};

pub struct ReturnVoidInsteadOfEmptyTuple;

impl Rule for ReturnVoidInsteadOfEmptyTuple {
    const NAME: &'static str = "ReturnVoidInsteadOfEmptyTuple";
    const KINDS: &'static [SyntaxKind] = &[SyntaxKind::ReturnClause];
}

impl LintRule for ReturnVoidInsteadOfEmptyTuple {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        if let Some(ty) = node.child_nodes().next().filter(|ty| is_empty_tuple(ty)) {
            cx.diagnose_at_node(ty, "replace '()' with 'Void'");
        }
        VisitAction::Continue
    }
}

impl FormatRule for ReturnVoidInsteadOfEmptyTuple {
    fn rewrite(node: SyntaxNode, _cx: &Context<'_>) -> SyntaxNode {
        let kind = node.kind();
        let children = node
            .into_children()
            .into_iter()
            .map(|child| match child {
                SyntaxElement::Node(ty) if is_empty_tuple(&ty) => SyntaxElement::Node(void_type(ty)),
                other => other,
            })
            .collect();
        SyntaxNode::new(kind, children)
    }
}

/// `()` with nothing but whitespace between the parentheses.
fn is_empty_tuple(ty: &SyntaxNode) -> bool {
    ty.kind() == SyntaxKind::TupleType
        && matches!(
            ty.children(),
            [SyntaxElement::Token(left), SyntaxElement::Token(right)]
                if left.kind == TokenKind::LeftParen
                    && right.kind == TokenKind::RightParen
                    && !left.trailing_trivia.has_comments()
                    && !right.leading_trivia.has_comments()
        )
}

fn void_type(tuple: SyntaxNode) -> SyntaxNode {
    let mut tokens = tuple.into_children().into_iter().filter_map(|child| match child {
        SyntaxElement::Token(token) => Some(token),
        SyntaxElement::Node(_) => None,
    });
    let left = tokens.next();
    let right = tokens.last();

    let mut void = Token::synthesized(TokenKind::Identifier, "Void");
    if let Some(left) = left {
        void.leading_trivia = left.leading_trivia;
    }
    if let Some(right) = right {
        void.trailing_trivia = right.trailing_trivia;
    }
    SyntaxNode::new(SyntaxKind::SimpleType, vec![void.into()])
}
