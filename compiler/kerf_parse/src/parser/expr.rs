//! Expressions and types.

use kerf_ir::{Keyword, SyntaxElement, SyntaxKind, SyntaxNode, TokenKind};
use kerf_stack::ensure_sufficient_stack;

use super::Parser;

impl Parser {
    /// Operands and operators in source order. A lone operand is returned
    /// as is; anything longer becomes a `SequenceExpr`.
    ///
    /// Parentheses and call arguments re-enter here, so the stack grows
    /// with nesting depth.
    pub(super) fn expression(&mut self) -> SyntaxNode {
        ensure_sufficient_stack(|| self.expression_inner())
    }

    fn expression_inner(&mut self) -> SyntaxNode {
        let first = self.unary();
        if !matches!(self.peek(), TokenKind::Operator | TokenKind::Equal) {
            return first;
        }
        let mut children: Vec<SyntaxElement> = vec![first.into()];
        while matches!(self.peek(), TokenKind::Operator | TokenKind::Equal) {
            let operator = self.node_of_current(SyntaxKind::BinaryOperatorExpr);
            children.push(operator.into());
            children.push(self.unary().into());
        }
        SyntaxNode::new(SyntaxKind::SequenceExpr, children)
    }

    fn unary(&mut self) -> SyntaxNode {
        if matches!(self.peek(), TokenKind::Operator | TokenKind::Exclamation) {
            let operator = self.bump();
            let operand = ensure_sufficient_stack(|| self.unary());
            return SyntaxNode::new(SyntaxKind::PrefixOperatorExpr, vec![operator, operand.into()]);
        }
        self.postfix()
    }

    fn postfix(&mut self) -> SyntaxNode {
        let mut expr = self.primary();
        loop {
            expr = match self.peek() {
                TokenKind::LeftParen if !self.at_line_start() => self.call(expr),
                TokenKind::Period => {
                    let mut children = vec![expr.into(), self.bump()];
                    self.expect(TokenKind::Identifier, &mut children);
                    SyntaxNode::new(SyntaxKind::MemberAccessExpr, children)
                }
                TokenKind::Exclamation if self.is_adjacent() => {
                    let children = vec![expr.into(), self.bump()];
                    SyntaxNode::new(SyntaxKind::ForceUnwrapExpr, children)
                }
                _ => return expr,
            };
        }
    }

    fn call(&mut self, callee: SyntaxNode) -> SyntaxNode {
        let mut children = vec![callee.into(), self.bump()];
        while !matches!(self.peek(), TokenKind::RightParen | TokenKind::EndOfFile) {
            let mut argument = Vec::new();
            if self.at(TokenKind::Identifier) && self.peek_nth(1) == TokenKind::Colon {
                argument.push(self.bump());
                argument.push(self.bump());
            }
            argument.push(self.expression().into());
            let more = self.at(TokenKind::Comma);
            if more {
                argument.push(self.bump());
            }
            children.push(SyntaxNode::new(SyntaxKind::Argument, argument).into());
            if !more {
                break;
            }
        }
        self.expect(TokenKind::RightParen, &mut children);
        SyntaxNode::new(SyntaxKind::FunctionCallExpr, children)
    }

    fn primary(&mut self) -> SyntaxNode {
        match self.peek() {
            TokenKind::Identifier => self.node_of_current(SyntaxKind::IdentifierExpr),
            TokenKind::IntegerLiteral => self.node_of_current(SyntaxKind::IntegerLiteralExpr),
            TokenKind::StringLiteral => self.node_of_current(SyntaxKind::StringLiteralExpr),
            TokenKind::Keyword(Keyword::True | Keyword::False) => {
                self.node_of_current(SyntaxKind::BooleanLiteralExpr)
            }
            TokenKind::LeftParen => self.tuple_expr(),
            TokenKind::RightBrace
            | TokenKind::RightParen
            | TokenKind::Semicolon
            | TokenKind::Comma
            | TokenKind::EndOfFile => SyntaxNode::missing(),
            _ => self.node_of_current(SyntaxKind::Unknown),
        }
    }

    /// `( elements )`. One element without a trailing comma is a
    /// parenthesized expression.
    fn tuple_expr(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];
        while !matches!(self.peek(), TokenKind::RightParen | TokenKind::EndOfFile) {
            children.push(self.expression().into());
            if !self.at(TokenKind::Comma) {
                break;
            }
            children.push(self.bump());
        }
        self.expect(TokenKind::RightParen, &mut children);
        SyntaxNode::new(SyntaxKind::TupleExpr, children)
    }

    /// A type, with any `?` and `!` suffixes.
    pub(super) fn type_(&mut self) -> SyntaxNode {
        ensure_sufficient_stack(|| self.type_inner())
    }

    fn type_inner(&mut self) -> SyntaxNode {
        let mut ty = match self.peek() {
            TokenKind::Identifier => self.node_of_current(SyntaxKind::SimpleType),
            TokenKind::LeftParen => self.tuple_type(),
            _ => SyntaxNode::missing(),
        };
        loop {
            let kind = match self.peek() {
                TokenKind::Question if self.is_adjacent() => SyntaxKind::OptionalType,
                TokenKind::Exclamation if self.is_adjacent() => {
                    SyntaxKind::ImplicitlyUnwrappedOptionalType
                }
                _ => return ty,
            };
            ty = SyntaxNode::new(kind, vec![ty.into(), self.bump()]);
        }
    }

    fn tuple_type(&mut self) -> SyntaxNode {
        let mut children = vec![self.bump()];
        while !matches!(self.peek(), TokenKind::RightParen | TokenKind::EndOfFile) {
            children.push(self.type_().into());
            if !self.at(TokenKind::Comma) {
                break;
            }
            children.push(self.bump());
        }
        self.expect(TokenKind::RightParen, &mut children);
        SyntaxNode::new(SyntaxKind::TupleType, children)
    }
}
