//! Tree nodes and traversal helpers.
//!
//! # Design
//!
//! The tree is a plain owned value: a node is a kind plus ordered children,
//! and every child is either a nested node or a token. There is no parent
//! pointer and no interior mutability. Read-only passes borrow the tree;
//! rewriting passes take it by value and rebuild what they change, which
//! keeps a rewrite from ever being observed by a pass that already borrowed
//! the original.

use std::fmt;

use kerf_stack::ensure_sufficient_stack;

use crate::{Span, SyntaxKind, Token, TokenKind, Trivia};

/// A child of a [`SyntaxNode`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(Token),
}

impl SyntaxElement {
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        }
    }

    pub fn first_token(&self) -> Option<&Token> {
        match self {
            SyntaxElement::Node(node) => node.first_token(),
            SyntaxElement::Token(token) => Some(token),
        }
    }
}

impl From<SyntaxNode> for SyntaxElement {
    fn from(node: SyntaxNode) -> Self {
        SyntaxElement::Node(node)
    }
}

impl From<Token> for SyntaxElement {
    fn from(token: Token) -> Self {
        SyntaxElement::Token(token)
    }
}

impl fmt::Display for SyntaxElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxElement::Node(node) => write!(f, "{node}"),
            SyntaxElement::Token(token) => write!(f, "{token}"),
        }
    }
}

/// Cloning and dropping recurse once per level of nesting and grow the
/// stack as they go.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    children: Vec<SyntaxElement>,
}

impl Clone for SyntaxNode {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| SyntaxNode {
            kind: self.kind,
            children: self.children.clone(),
        })
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let children = std::mem::take(&mut self.children);
        ensure_sufficient_stack(move || drop(children));
    }
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, children: Vec<SyntaxElement>) -> Self {
        SyntaxNode { kind, children }
    }

    /// A node standing in for a required piece the source does not have.
    pub fn missing() -> Self {
        SyntaxNode::new(SyntaxKind::Unknown, Vec::new())
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn children(&self) -> &[SyntaxElement] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<SyntaxElement> {
        &mut self.children
    }

    pub fn into_children(mut self) -> Vec<SyntaxElement> {
        std::mem::take(&mut self.children)
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// First direct child node of the given kind.
    pub fn child_node(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.child_nodes().find(|node| node.kind == kind)
    }

    /// First direct child token of the given kind.
    pub fn child_token(&self, kind: TokenKind) -> Option<&Token> {
        self.child_tokens().find(|token| token.kind == kind)
    }

    pub fn first_token(&self) -> Option<&Token> {
        self.tokens().next()
    }

    pub fn last_token(&self) -> Option<&Token> {
        ensure_sufficient_stack(move || {
            self.children.iter().rev().find_map(|child| match child {
                SyntaxElement::Node(node) => node.last_token(),
                SyntaxElement::Token(token) => Some(token),
            })
        })
    }

    pub fn first_token_mut(&mut self) -> Option<&mut Token> {
        ensure_sufficient_stack(move || {
            for child in &mut self.children {
                match child {
                    SyntaxElement::Token(token) => return Some(token),
                    SyntaxElement::Node(node) => {
                        if let Some(token) = node.first_token_mut() {
                            return Some(token);
                        }
                    }
                }
            }
            None
        })
    }

    pub fn last_token_mut(&mut self) -> Option<&mut Token> {
        ensure_sufficient_stack(move || {
            for child in self.children.iter_mut().rev() {
                match child {
                    SyntaxElement::Token(token) => return Some(token),
                    SyntaxElement::Node(node) => {
                        if let Some(token) = node.last_token_mut() {
                            return Some(token);
                        }
                    }
                }
            }
            None
        })
    }

    /// All tokens under this node, in source order.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            stack: vec![self.children.iter()],
        }
    }

    pub fn leading_trivia(&self) -> Option<&Trivia> {
        self.first_token().map(|token| &token.leading_trivia)
    }

    pub fn trailing_trivia(&self) -> Option<&Trivia> {
        self.last_token().map(|token| &token.trailing_trivia)
    }

    /// Replace the leading trivia of the first token, if there is one.
    pub fn set_leading_trivia(&mut self, trivia: Trivia) {
        if let Some(token) = self.first_token_mut() {
            token.leading_trivia = trivia;
        }
    }

    /// Replace the trailing trivia of the last token, if there is one.
    pub fn set_trailing_trivia(&mut self, trivia: Trivia) {
        if let Some(token) = self.last_token_mut() {
            token.trailing_trivia = trivia;
        }
    }

    /// Offset of the first token's text in the original source.
    pub fn start_offset(&self) -> Option<u32> {
        self.first_token().and_then(|token| token.source_offset)
    }

    /// Span from the first token's text to the end of the last token's text,
    /// excluding the outer trivia.
    pub fn span(&self) -> Option<Span> {
        let first = self.first_token()?.span()?;
        let last = self.last_token()?.span()?;
        Some(first.merge(last))
    }

    /// Length of the full text, trivia included.
    pub fn text_len(&self) -> usize {
        self.tokens().map(Token::full_len).sum()
    }

    /// The node's text without the first token's leading trivia and the last
    /// token's trailing trivia.
    pub fn trimmed_text(&self) -> String {
        let full = self.to_string();
        let lead = self
            .first_token()
            .map_or(0, |token| token.leading_trivia.text_len());
        let trail = self
            .last_token()
            .map_or(0, |token| token.trailing_trivia.text_len());
        full.get(lead..full.len().saturating_sub(trail))
            .unwrap_or_default()
            .to_string()
    }

    /// `true` when no `Unknown` node appears anywhere in the tree.
    pub fn is_valid(&self) -> bool {
        self.first_invalid_offset().is_none()
    }

    /// Source offset of the first `Unknown` node in pre-order.
    ///
    /// An empty `Unknown` node (a missing piece) reports the end of the
    /// preceding token's text.
    pub fn first_invalid_offset(&self) -> Option<u32> {
        fn walk(node: &SyntaxNode, cursor: &mut u32) -> Option<u32> {
            if node.kind == SyntaxKind::Unknown {
                return Some(node.start_offset().unwrap_or(*cursor));
            }
            ensure_sufficient_stack(|| {
                for child in &node.children {
                    match child {
                        SyntaxElement::Node(child) => {
                            if let Some(offset) = walk(child, cursor) {
                                return Some(offset);
                            }
                        }
                        SyntaxElement::Token(token) => {
                            if let Some(span) = token.span() {
                                *cursor = span.end;
                            }
                        }
                    }
                }
                None
            })
        }

        let mut cursor = 0;
        walk(self, &mut cursor)
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens() {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Pre-order token iterator returned by [`SyntaxNode::tokens`].
pub struct Tokens<'a> {
    stack: Vec<std::slice::Iter<'a, SyntaxElement>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(SyntaxElement::Token(token)) => return Some(token),
                Some(SyntaxElement::Node(node)) => self.stack.push(node.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
