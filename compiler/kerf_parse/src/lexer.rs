//! Lossless lexer.
//!
//! Splits source into tokens and attaches every other byte to a token as
//! trivia. Trailing trivia stops before the first line break; the break and
//! everything after it up to the next token is that token's leading trivia.
//! The final trivia of the file rides on an `EndOfFile` token.
//!
//! The lexer never fails. Bytes it cannot classify become `Unknown` tokens
//! and the parser turns those into `Unknown` nodes.

use kerf_ir::{Keyword, Token, TokenKind, Trivia, TriviaPiece};

/// Characters that form operator runs.
const OPERATOR_CHARS: &[u8] = b"=-+!*/%<>&|^~?";

/// Lex `source` into tokens. The last token is always `EndOfFile`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer { source, pos: 0 };
    let mut tokens = Vec::new();
    let mut leading = lexer.trivia(true);

    loop {
        let start = lexer.pos;
        if start >= source.len() {
            tokens.push(Token::new(TokenKind::EndOfFile, "", offset(start)).with_leading_trivia(leading));
            return tokens;
        }
        let kind = lexer.scan_token();
        let text = &source[start..lexer.pos];
        let trailing = lexer.trivia(false);
        tokens.push(
            Token::new(kind, text, offset(start))
                .with_leading_trivia(leading)
                .with_trailing_trivia(trailing),
        );
        leading = lexer.trivia(true);
    }
}

#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

struct Lexer<'src> {
    source: &'src str,
    pos: usize,
}

impl Lexer<'_> {
    #[inline]
    fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes().get(self.pos + ahead).copied()
    }

    fn rest(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Scan trivia. Leading trivia may cross line breaks; trailing trivia
    /// stops at the first one.
    fn trivia(&mut self, leading: bool) -> Trivia {
        let mut trivia = Trivia::new();
        while let Some(byte) = self.peek() {
            let piece = match byte {
                b' ' => TriviaPiece::Spaces(self.run_of(b' ')),
                b'\t' => TriviaPiece::Tabs(self.run_of(b'\t')),
                b'\n' if leading => TriviaPiece::Newlines(self.run_of(b'\n')),
                b'\r' if leading => {
                    if self.peek_at(1) == Some(b'\n') {
                        self.pos += 2;
                        TriviaPiece::CarriageReturnLineFeeds(1)
                    } else {
                        self.pos += 1;
                        TriviaPiece::CarriageReturns(1)
                    }
                }
                b'/' if self.peek_at(1) == Some(b'/') => self.line_comment(),
                b'/' if self.peek_at(1) == Some(b'*') => self.block_comment(),
                _ => break,
            };
            trivia.push(piece);
        }
        trivia
    }

    fn run_of(&mut self, byte: u8) -> usize {
        let count = self.bytes()[self.pos..]
            .iter()
            .take_while(|&&b| b == byte)
            .count();
        self.pos += count;
        count
    }

    fn line_comment(&mut self) -> TriviaPiece {
        let rest = self.rest();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let text = rest[..len].to_string();
        self.pos += len;
        if text.starts_with("///") && !text.starts_with("////") {
            TriviaPiece::DocLineComment(text)
        } else {
            TriviaPiece::LineComment(text)
        }
    }

    fn block_comment(&mut self) -> TriviaPiece {
        let rest = self.rest();
        let len = memchr::memmem::find(&rest.as_bytes()[2..], b"*/").map_or(rest.len(), |end| end + 4);
        let text = rest[..len].to_string();
        self.pos += len;
        if text.starts_with("/**") && !text.starts_with("/**/") {
            TriviaPiece::DocBlockComment(text)
        } else {
            TriviaPiece::BlockComment(text)
        }
    }

    /// Scan one token starting at a non-trivia byte.
    fn scan_token(&mut self) -> TokenKind {
        let Some(c) = self.rest().chars().next() else {
            return TokenKind::EndOfFile;
        };
        match c {
            c if c.is_alphabetic() || c == '_' => self.identifier_or_keyword(),
            '0'..='9' => {
                self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::IntegerLiteral
            }
            '"' => self.string_literal(),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '[' => self.single(TokenKind::LeftSquare),
            ']' => self.single(TokenKind::RightSquare),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            '.' => self.single(TokenKind::Period),
            '!' | '?' if self.in_postfix_position() => {
                self.pos += 1;
                if c == '!' {
                    TokenKind::Exclamation
                } else {
                    TokenKind::Question
                }
            }
            c if c.is_ascii() && OPERATOR_CHARS.contains(&(c as u8)) => self.operator(),
            c => {
                self.pos += c.len_utf8();
                TokenKind::Unknown
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();
        self.pos += len;
    }

    fn identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.pos;
        self.advance_while(|c| c.is_alphanumeric() || c == '_');
        match Keyword::lookup(&self.source[start..self.pos]) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        }
    }

    /// A `"`-delimited literal on one line. Unterminated literals end before
    /// the line break and lex as `Unknown`.
    fn string_literal(&mut self) -> TokenKind {
        self.pos += 1;
        let mut escaped = false;
        while let Some(byte) = self.peek() {
            match byte {
                b'\n' | b'\r' => return TokenKind::Unknown,
                b'"' if !escaped => {
                    self.pos += 1;
                    return TokenKind::StringLiteral;
                }
                b'\\' => escaped = !escaped,
                _ => escaped = false,
            }
            self.pos += 1;
        }
        TokenKind::Unknown
    }

    /// `!` and `?` directly after an operand are postfix.
    fn in_postfix_position(&self) -> bool {
        let Some(&previous) = self.bytes().get(self.pos.wrapping_sub(1)) else {
            return false;
        };
        !(previous.is_ascii_whitespace()
            || b"([{,;:".contains(&previous)
            || OPERATOR_CHARS.contains(&previous))
    }

    fn operator(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            let starts_comment = byte == b'/' && matches!(self.peek_at(1), Some(b'/' | b'*'));
            if !OPERATOR_CHARS.contains(&byte) || (starts_comment && self.pos > start) {
                break;
            }
            self.pos += 1;
        }
        match &self.source[start..self.pos] {
            "=" => TokenKind::Equal,
            "->" => TokenKind::Arrow,
            "!" => TokenKind::Exclamation,
            "?" => TokenKind::Question,
            _ => TokenKind::Operator,
        }
    }
}
