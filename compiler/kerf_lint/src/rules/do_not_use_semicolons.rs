//! `DoNotUseSemicolons`: statements are separated by line breaks.
//!
//! A semicolon is removed together with any whitespace it separated. When
//! another statement follows on the same line, that statement moves to a
//! new line. Comments next to the semicolon are kept.

use kerf_ir::{SyntaxElement, SyntaxKind, SyntaxNode, Token, TokenKind, Trivia};

use crate::context::Context;
use crate::rule::{FormatRule, LintRule, Rule, RuleContext, VisitAction};

pub struct DoNotUseSemicolons;

impl Rule for DoNotUseSemicolons {
    const NAME: &'static str = "DoNotUseSemicolons";
    const KINDS: &'static [SyntaxKind] = &[
        SyntaxKind::SourceFile,
        SyntaxKind::CodeBlock,
        SyntaxKind::MemberBlock,
    ];
}

impl LintRule for DoNotUseSemicolons {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        let children = node.children();
        for (index, child) in children.iter().enumerate() {
            let Some(semicolon) = as_item(child).and_then(trailing_semicolon) else {
                continue;
            };
            let message = if next_item_on_same_line(children, index) {
                "remove ';' and move the next statement to a new line"
            } else {
                "remove ';'"
            };
            cx.diagnose_at_token(semicolon, message);
        }
        VisitAction::Continue
    }
}

impl FormatRule for DoNotUseSemicolons {
    fn rewrite(node: SyntaxNode, _cx: &Context<'_>) -> SyntaxNode {
        let kind = node.kind();
        let mut children = node.into_children();
        let mut carried: Option<Trivia> = None;

        for index in 0..children.len() {
            let same_line = next_item_on_same_line(&children, index);
            let Some(SyntaxElement::Node(item)) = children.get_mut(index) else {
                continue;
            };
            if item.kind() != SyntaxKind::CodeBlockItem {
                continue;
            }
            if let Some(carry) = carried.take() {
                if let Some(first) = item.first_token_mut() {
                    let leading = std::mem::take(&mut first.leading_trivia);
                    first.leading_trivia = carry.appending(leading);
                }
            }
            let Some(semicolon) = remove_trailing_semicolon(item) else {
                continue;
            };
            let moved = semicolon
                .leading_trivia
                .appending(semicolon.trailing_trivia);
            let Some(last) = item.last_token_mut() else {
                continue;
            };
            let trailing = std::mem::take(&mut last.trailing_trivia);
            if same_line {
                last.trailing_trivia = trailing.without_trailing_spaces();
                carried = Some(Trivia::newlines(1).appending(moved.without_leading_spaces()));
            } else {
                last.trailing_trivia = trailing.appending(moved);
            }
        }
        SyntaxNode::new(kind, children)
    }
}

fn as_item(element: &SyntaxElement) -> Option<&SyntaxNode> {
    element
        .as_node()
        .filter(|node| node.kind() == SyntaxKind::CodeBlockItem)
}

fn trailing_semicolon(item: &SyntaxNode) -> Option<&Token> {
    item.children()
        .last()
        .and_then(SyntaxElement::as_token)
        .filter(|token| token.kind == TokenKind::Semicolon)
}

fn remove_trailing_semicolon(item: &mut SyntaxNode) -> Option<Token> {
    let children = item.children_mut();
    match children.pop() {
        Some(SyntaxElement::Token(token)) if token.kind == TokenKind::Semicolon => Some(token),
        Some(other) => {
            children.push(other);
            None
        }
        None => None,
    }
}

/// Whether the sibling after `children[index]` is an item that starts on
/// the same line.
fn next_item_on_same_line(children: &[SyntaxElement], index: usize) -> bool {
    children
        .get(index + 1)
        .and_then(as_item)
        .and_then(SyntaxNode::first_token)
        .is_some_and(|token| !token.leading_trivia.contains_newlines())
}
