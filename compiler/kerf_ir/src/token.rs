//! Tokens with their attached trivia.

use std::fmt;

use crate::{Span, Trivia};

/// Reserved words of the source language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Var,
    Func,
    Struct,
    Enum,
    Case,
    Import,
    Return,
    If,
    Else,
    True,
    False,
}

impl Keyword {
    pub fn lookup(text: &str) -> Option<Keyword> {
        Some(match text {
            "let" => Keyword::Let,
            "var" => Keyword::Var,
            "func" => Keyword::Func,
            "struct" => Keyword::Struct,
            "enum" => Keyword::Enum,
            "case" => Keyword::Case,
            "import" => Keyword::Import,
            "return" => Keyword::Return,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "true" => Keyword::True,
            "false" => Keyword::False,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Var => "var",
            Keyword::Func => "func",
            Keyword::Struct => "struct",
            Keyword::Enum => "enum",
            Keyword::Case => "case",
            Keyword::Import => "import",
            Keyword::Return => "return",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    IntegerLiteral,
    StringLiteral,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftSquare,
    RightSquare,
    Comma,
    Colon,
    Semicolon,
    Period,
    Equal,
    Arrow,
    /// A lone `!`. Postfix (force unwrap) or prefix depending on position.
    Exclamation,
    /// A lone `?`.
    Question,
    /// Any other run of operator characters.
    Operator,
    /// A character the lexer does not understand, or an unterminated literal.
    Unknown,
    /// Carries the trivia at the end of the file. Its text is always empty.
    EndOfFile,
}

/// A token: its text plus leading and trailing trivia.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub leading_trivia: Trivia,
    pub trailing_trivia: Trivia,
    /// Byte offset of `text` in the original source.
    ///
    /// `None` for tokens created by a rewrite.
    pub source_offset: Option<u32>,
}

impl Token {
    /// A token that was read from the source at `offset`.
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            leading_trivia: Trivia::new(),
            trailing_trivia: Trivia::new(),
            source_offset: Some(offset),
        }
    }

    /// A token with no source position.
    pub fn synthesized(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            leading_trivia: Trivia::new(),
            trailing_trivia: Trivia::new(),
            source_offset: None,
        }
    }

    #[must_use]
    pub fn with_leading_trivia(mut self, trivia: Trivia) -> Self {
        self.leading_trivia = trivia;
        self
    }

    #[must_use]
    pub fn with_trailing_trivia(mut self, trivia: Trivia) -> Self {
        self.trailing_trivia = trivia;
        self
    }

    /// Span of the token text in the original source.
    pub fn span(&self) -> Option<Span> {
        let start = self.source_offset?;
        let len = u32::try_from(self.text.len()).ok()?;
        Some(Span::new(start, start.saturating_add(len)))
    }

    /// Byte offset where the leading trivia starts in the original source.
    pub fn full_start(&self) -> Option<u32> {
        let start = self.source_offset?;
        let leading = u32::try_from(self.leading_trivia.text_len()).ok()?;
        start.checked_sub(leading)
    }

    /// Length of leading trivia, text, and trailing trivia together.
    pub fn full_len(&self) -> usize {
        self.leading_trivia.text_len() + self.text.len() + self.trailing_trivia.text_len()
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.leading_trivia, self.text, self.trailing_trivia)
    }
}
