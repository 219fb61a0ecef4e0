//! Inter-token text: whitespace and comments.
//!
//! Every byte of the source that is not part of a token's text lives in a
//! token's leading or trailing [`Trivia`]. Trailing trivia runs up to, but
//! not including, the next newline; everything from that newline on belongs
//! to the following token's leading trivia. Concatenating each token's
//! leading trivia, text, and trailing trivia reproduces the source exactly.

use std::fmt;

/// One run of whitespace or one comment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriviaPiece {
    Spaces(usize),
    Tabs(usize),
    Newlines(usize),
    CarriageReturns(usize),
    CarriageReturnLineFeeds(usize),
    /// `// ...`, without the terminating newline.
    LineComment(String),
    /// `/// ...`, without the terminating newline.
    DocLineComment(String),
    /// `/* ... */`
    BlockComment(String),
    /// `/** ... */`
    DocBlockComment(String),
}

impl TriviaPiece {
    /// Length of the piece in bytes.
    pub fn text_len(&self) -> usize {
        match self {
            TriviaPiece::Spaces(n)
            | TriviaPiece::Tabs(n)
            | TriviaPiece::Newlines(n)
            | TriviaPiece::CarriageReturns(n) => *n,
            TriviaPiece::CarriageReturnLineFeeds(n) => n * 2,
            TriviaPiece::LineComment(text)
            | TriviaPiece::DocLineComment(text)
            | TriviaPiece::BlockComment(text)
            | TriviaPiece::DocBlockComment(text) => text.len(),
        }
    }

    /// Vertical whitespace of any flavor.
    pub fn is_newline(&self) -> bool {
        matches!(
            self,
            TriviaPiece::Newlines(_)
                | TriviaPiece::CarriageReturns(_)
                | TriviaPiece::CarriageReturnLineFeeds(_)
        )
    }

    pub fn is_horizontal_space(&self) -> bool {
        matches!(self, TriviaPiece::Spaces(_) | TriviaPiece::Tabs(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TriviaPiece::LineComment(_)
                | TriviaPiece::DocLineComment(_)
                | TriviaPiece::BlockComment(_)
                | TriviaPiece::DocBlockComment(_)
        )
    }

    /// Number of line breaks this piece introduces, including those inside
    /// block comments.
    pub fn line_break_count(&self) -> usize {
        match self {
            TriviaPiece::Newlines(n)
            | TriviaPiece::CarriageReturns(n)
            | TriviaPiece::CarriageReturnLineFeeds(n) => *n,
            TriviaPiece::BlockComment(text) | TriviaPiece::DocBlockComment(text) => {
                text.bytes().filter(|&b| b == b'\n').count()
            }
            _ => 0,
        }
    }

    /// Merge `other` into `self` when both are runs of the same character.
    fn try_merge(&mut self, other: &TriviaPiece) -> bool {
        match (self, other) {
            (TriviaPiece::Spaces(a), TriviaPiece::Spaces(b))
            | (TriviaPiece::Tabs(a), TriviaPiece::Tabs(b))
            | (TriviaPiece::Newlines(a), TriviaPiece::Newlines(b))
            | (TriviaPiece::CarriageReturns(a), TriviaPiece::CarriageReturns(b))
            | (TriviaPiece::CarriageReturnLineFeeds(a), TriviaPiece::CarriageReturnLineFeeds(b)) => {
                *a += b;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for TriviaPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn repeat(f: &mut fmt::Formatter<'_>, s: &str, n: usize) -> fmt::Result {
            for _ in 0..n {
                f.write_str(s)?;
            }
            Ok(())
        }
        match self {
            TriviaPiece::Spaces(n) => repeat(f, " ", *n),
            TriviaPiece::Tabs(n) => repeat(f, "\t", *n),
            TriviaPiece::Newlines(n) => repeat(f, "\n", *n),
            TriviaPiece::CarriageReturns(n) => repeat(f, "\r", *n),
            TriviaPiece::CarriageReturnLineFeeds(n) => repeat(f, "\r\n", *n),
            TriviaPiece::LineComment(text)
            | TriviaPiece::DocLineComment(text)
            | TriviaPiece::BlockComment(text)
            | TriviaPiece::DocBlockComment(text) => f.write_str(text),
        }
    }
}

/// Ordered sequence of trivia pieces attached to one side of a token.
///
/// Adjacent runs of the same whitespace character are kept merged, so
/// `Spaces(1)` pushed twice is stored as `Spaces(2)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trivia {
    pieces: Vec<TriviaPiece>,
}

impl Trivia {
    pub fn new() -> Self {
        Trivia { pieces: Vec::new() }
    }

    pub fn spaces(count: usize) -> Self {
        Trivia::from_iter([TriviaPiece::Spaces(count)])
    }

    pub fn newlines(count: usize) -> Self {
        Trivia::from_iter([TriviaPiece::Newlines(count)])
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        &self.pieces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriviaPiece> {
        self.pieces.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Append a piece, merging it with the last piece when possible.
    pub fn push(&mut self, piece: TriviaPiece) {
        if piece.text_len() == 0 {
            return;
        }
        if let Some(last) = self.pieces.last_mut() {
            if last.try_merge(&piece) {
                return;
            }
        }
        self.pieces.push(piece);
    }

    /// Append every piece of `other`.
    pub fn extend(&mut self, other: Trivia) {
        for piece in other.pieces {
            self.push(piece);
        }
    }

    /// `self` followed by `other`.
    #[must_use]
    pub fn appending(mut self, other: Trivia) -> Trivia {
        self.extend(other);
        self
    }

    /// Length of the whole trivia in bytes.
    pub fn text_len(&self) -> usize {
        self.pieces.iter().map(TriviaPiece::text_len).sum()
    }

    pub fn contains_newlines(&self) -> bool {
        self.pieces.iter().any(|piece| piece.line_break_count() > 0)
    }

    pub fn has_line_comment(&self) -> bool {
        self.pieces.iter().any(|piece| {
            matches!(
                piece,
                TriviaPiece::LineComment(_) | TriviaPiece::DocLineComment(_)
            )
        })
    }

    pub fn has_comments(&self) -> bool {
        self.pieces.iter().any(TriviaPiece::is_comment)
    }

    /// Drop horizontal whitespace at the front.
    #[must_use]
    pub fn without_leading_spaces(self) -> Trivia {
        let pieces = self
            .pieces
            .into_iter()
            .skip_while(TriviaPiece::is_horizontal_space)
            .collect();
        Trivia { pieces }
    }

    /// Drop horizontal whitespace at the end.
    #[must_use]
    pub fn without_trailing_spaces(mut self) -> Trivia {
        while self
            .pieces
            .last()
            .is_some_and(TriviaPiece::is_horizontal_space)
        {
            self.pieces.pop();
        }
        self
    }

    /// Pieces paired with their byte offset relative to the start of the trivia.
    pub fn pieces_with_offsets(&self) -> impl Iterator<Item = (usize, &TriviaPiece)> {
        self.pieces.iter().scan(0usize, |offset, piece| {
            let start = *offset;
            *offset += piece.text_len();
            Some((start, piece))
        })
    }
}

impl FromIterator<TriviaPiece> for Trivia {
    fn from_iter<I: IntoIterator<Item = TriviaPiece>>(iter: I) -> Self {
        let mut trivia = Trivia::new();
        for piece in iter {
            trivia.push(piece);
        }
        trivia
    }
}

impl<'a> IntoIterator for &'a Trivia {
    type Item = &'a TriviaPiece;
    type IntoIter = std::slice::Iter<'a, TriviaPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            write!(f, "{piece}")?;
        }
        Ok(())
    }
}
