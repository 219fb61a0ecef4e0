//! Recursive descent parser.
//!
//! # Grammar
//!
//! ```text
//! source_file  = item* EOF
//! item         = (decl | stmt | expr) ';'?
//! decl         = import | let/var | func | struct | enum | case
//! stmt         = return expr? | if expr block (else (if | block))?
//! expr         = unary (operator unary)*
//! unary        = operator unary | postfix
//! postfix      = primary ( '(' args ')' | '.' ident | '!' )*
//! type         = (ident | '(' types ')') ('?' | '!')*
//! ```
//!
//! # Error Recovery
//!
//! The parser never fails. A token that cannot start what is expected is
//! wrapped in an `Unknown` node and consumed; a required token that is
//! absent becomes an empty `Unknown` node. Either way the tree stays
//! lossless and reports itself invalid.

mod expr;

use std::collections::VecDeque;

use kerf_ir::{Keyword, SyntaxElement, SyntaxKind, SyntaxNode, Token, TokenKind};
use kerf_stack::ensure_sufficient_stack;

use crate::lexer::lex;

/// Parse `source` into a `SourceFile` tree.
///
/// Printing the result reproduces `source` byte for byte.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> SyntaxNode {
    let mut parser = Parser::new(lex(source));
    let tree = parser.source_file();
    tracing::debug!(valid = tree.is_valid(), "parsed source file");
    tree
}

struct Parser {
    tokens: VecDeque<Token>,
    /// Whether the most recently consumed token had trailing trivia.
    previous_had_trailing_trivia: bool,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens.into(),
            previous_had_trailing_trivia: true,
        }
    }

    // Cursor helpers

    fn peek(&self) -> TokenKind {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> TokenKind {
        self.tokens.get(n).map_or(TokenKind::EndOfFile, |t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn at_keyword(&self, keyword: Keyword) -> bool {
        self.at(TokenKind::Keyword(keyword))
    }

    /// The current token starts a new line.
    fn at_line_start(&self) -> bool {
        self.tokens
            .front()
            .is_some_and(|t| t.leading_trivia.contains_newlines())
    }

    /// No trivia separates the current token from the previous one.
    fn is_adjacent(&self) -> bool {
        !self.previous_had_trailing_trivia
            && self
                .tokens
                .front()
                .is_some_and(|t| t.leading_trivia.is_empty())
    }

    fn at_block_end(&self) -> bool {
        matches!(self.peek(), TokenKind::RightBrace | TokenKind::EndOfFile)
    }

    fn bump(&mut self) -> SyntaxElement {
        let token = self
            .tokens
            .pop_front()
            .unwrap_or_else(|| Token::synthesized(TokenKind::EndOfFile, ""));
        self.previous_had_trailing_trivia = !token.trailing_trivia.is_empty();
        SyntaxElement::Token(token)
    }

    /// Push the current token if it has `kind`, or a missing node if not.
    fn expect(&mut self, kind: TokenKind, children: &mut Vec<SyntaxElement>) {
        if self.at(kind) {
            children.push(self.bump());
        } else {
            children.push(SyntaxNode::missing().into());
        }
    }

    fn node_of_current(&mut self, kind: SyntaxKind) -> SyntaxNode {
        SyntaxNode::new(kind, vec![self.bump()])
    }

    // Items

    fn source_file(&mut self) -> SyntaxNode {
        let mut children = Vec::new();
        while !self.at(TokenKind::EndOfFile) {
            children.push(self.code_block_item().into());
        }
        children.push(self.bump());
        SyntaxNode::new(SyntaxKind::SourceFile, children)
    }

    /// Items up to a closing brace. Consumes at least one token per item.
    fn block_items(&mut self, children: &mut Vec<SyntaxElement>) {
        while !self.at_block_end() {
            children.push(self.code_block_item().into());
        }
    }

    fn code_block_item(&mut self) -> SyntaxNode {
        let item = match self.peek() {
            TokenKind::Keyword(Keyword::Import) => self.import_decl(),
            TokenKind::Keyword(Keyword::Let | Keyword::Var) => self.variable_decl(),
            TokenKind::Keyword(Keyword::Func) => self.function_decl(),
            TokenKind::Keyword(Keyword::Struct) => self.type_decl(SyntaxKind::StructDecl),
            TokenKind::Keyword(Keyword::Enum) => self.type_decl(SyntaxKind::EnumDecl),
            TokenKind::Keyword(Keyword::Case) => self.enum_case_decl(),
            TokenKind::Keyword(Keyword::Return) => self.return_stmt(),
            TokenKind::Keyword(Keyword::If) => self.if_stmt(),
            TokenKind::Keyword(Keyword::Else)
            | TokenKind::RightBrace
            | TokenKind::RightParen
            | TokenKind::RightSquare
            | TokenKind::Semicolon
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Unknown => self.node_of_current(SyntaxKind::Unknown),
            _ => self.expression(),
        };
        let mut children = vec![item.into()];
        if self.at(TokenKind::Semicolon) {
            children.push(self.bump());
        }
        SyntaxNode::new(SyntaxKind::CodeBlockItem, children)
    }

    fn import_decl(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];
        self.expect(TokenKind::Identifier, &mut children);
        while self.at(TokenKind::Period) {
            children.push(self.bump());
            self.expect(TokenKind::Identifier, &mut children);
        }
        SyntaxNode::new(SyntaxKind::ImportDecl, children)
    }

    fn variable_decl(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];

        let mut pattern = Vec::new();
        self.expect(TokenKind::Identifier, &mut pattern);
        children.push(SyntaxNode::new(SyntaxKind::IdentifierPattern, pattern).into());

        if self.at(TokenKind::Colon) {
            let annotation = vec![self.bump(), self.type_().into()];
            children.push(SyntaxNode::new(SyntaxKind::TypeAnnotation, annotation).into());
        }
        if self.at(TokenKind::Equal) {
            let initializer = vec![self.bump(), self.expression().into()];
            children.push(SyntaxNode::new(SyntaxKind::InitializerClause, initializer).into());
        }
        SyntaxNode::new(SyntaxKind::VariableDecl, children)
    }

    fn function_decl(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];
        self.expect(TokenKind::Identifier, &mut children);
        children.push(self.parameter_clause().into());
        if self.at(TokenKind::Arrow) {
            let clause = vec![self.bump(), self.type_().into()];
            children.push(SyntaxNode::new(SyntaxKind::ReturnClause, clause).into());
        }
        if self.at(TokenKind::LeftBrace) {
            children.push(self.block(SyntaxKind::CodeBlock).into());
        }
        SyntaxNode::new(SyntaxKind::FunctionDecl, children)
    }

    fn parameter_clause(&mut self) -> SyntaxNode {
        let mut children = Vec::new();
        if !self.at(TokenKind::LeftParen) {
            children.push(SyntaxNode::missing().into());
            return SyntaxNode::new(SyntaxKind::ParameterClause, children);
        }
        children.push(self.bump());
        while !matches!(
            self.peek(),
            TokenKind::RightParen | TokenKind::LeftBrace | TokenKind::EndOfFile
        ) {
            let mut parameter = Vec::new();
            self.expect(TokenKind::Identifier, &mut parameter);
            self.expect(TokenKind::Colon, &mut parameter);
            parameter.push(self.type_().into());
            if self.at(TokenKind::Comma) {
                parameter.push(self.bump());
                children.push(SyntaxNode::new(SyntaxKind::FunctionParameter, parameter).into());
            } else {
                children.push(SyntaxNode::new(SyntaxKind::FunctionParameter, parameter).into());
                break;
            }
        }
        self.expect(TokenKind::RightParen, &mut children);
        SyntaxNode::new(SyntaxKind::ParameterClause, children)
    }

    /// `struct Name { ... }` or `enum Name { ... }`.
    fn type_decl(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut children = vec![self.bump()];
        self.expect(TokenKind::Identifier, &mut children);
        children.push(self.block(SyntaxKind::MemberBlock).into());
        SyntaxNode::new(kind, children)
    }

    fn enum_case_decl(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];
        loop {
            let mut element = Vec::new();
            self.expect(TokenKind::Identifier, &mut element);
            children.push(SyntaxNode::new(SyntaxKind::EnumCaseElement, element).into());
            if !self.at(TokenKind::Comma) {
                break;
            }
            children.push(self.bump());
        }
        SyntaxNode::new(SyntaxKind::EnumCaseDecl, children)
    }

    /// `{ items }`; `kind` is `CodeBlock` or `MemberBlock`.
    fn block(&mut self, kind: SyntaxKind) -> SyntaxNode {
        ensure_sufficient_stack(|| self.block_inner(kind))
    }

    fn block_inner(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut children = Vec::new();
        if !self.at(TokenKind::LeftBrace) {
            children.push(SyntaxNode::missing().into());
            return SyntaxNode::new(kind, children);
        }
        children.push(self.bump());
        self.block_items(&mut children);
        self.expect(TokenKind::RightBrace, &mut children);
        SyntaxNode::new(kind, children)
    }

    fn return_stmt(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];
        let has_value = !self.at_block_end() && !self.at(TokenKind::Semicolon) && !self.at_line_start();
        if has_value {
            children.push(self.expression().into());
        }
        SyntaxNode::new(SyntaxKind::ReturnStmt, children)
    }

    fn if_stmt(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump(), self.expression().into()];
        children.push(self.block(SyntaxKind::CodeBlock).into());
        if self.at_keyword(Keyword::Else) {
            let mut clause = vec![self.bump()];
            if self.at_keyword(Keyword::If) {
                clause.push(ensure_sufficient_stack(|| self.if_stmt()).into());
            } else {
                clause.push(self.block(SyntaxKind::CodeBlock).into());
            }
            children.push(SyntaxNode::new(SyntaxKind::ElseClause, clause).into());
        }
        SyntaxNode::new(SyntaxKind::IfStmt, children)
    }
}

#[cfg(test)]
mod tests;
