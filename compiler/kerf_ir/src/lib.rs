//! Kerf IR - lossless syntax trees
//!
//! This crate contains the tree abstraction the rest of kerf works on:
//! - [`Span`] for byte ranges in the original source
//! - [`Trivia`] and [`TriviaPiece`] for whitespace and comments
//! - [`Token`] and [`TokenKind`] for lexed text with attached trivia
//! - [`SyntaxKind`], the closed set of node kinds
//! - [`SyntaxNode`] and [`SyntaxElement`] for the tree itself
//!
//! # Losslessness
//!
//! Printing a tree with `Display` yields exactly the text it was parsed
//! from. Rewrites that move trivia around instead of dropping it keep that
//! property for the rewritten text.

mod kind;
mod span;
mod syntax;
mod token;
mod trivia;

pub use kind::SyntaxKind;
pub use span::Span;
pub use syntax::{SyntaxElement, SyntaxNode, Tokens};
pub use token::{Keyword, Token, TokenKind};
pub use trivia::{Trivia, TriviaPiece};
