//! Errors that stop a file from being linted or formatted.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The tree contains source the parser could not understand. Rules never
    /// run over such a tree.
    #[error("source contains invalid syntax at {line}:{column}")]
    InvalidSyntax { line: u32, column: u32 },
}
