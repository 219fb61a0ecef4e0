//! Reference front end for kerf.
//!
//! Lexes and parses a compact Swift-like language into lossless
//! [`kerf_ir::SyntaxNode`] trees. Declarations (`import`, `let`, `var`,
//! `func`, `struct`, `enum`, `case`), `return` and `if` statements,
//! expressions with calls, member access, force unwraps and operator
//! sequences, and types with `?`/`!` suffixes are understood. Everything
//! else survives as `Unknown` nodes so the tree still prints back to its
//! source.

mod lexer;
mod parser;

pub use lexer::lex;
pub use parser::parse;
