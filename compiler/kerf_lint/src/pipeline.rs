//! Rule dispatch.
//!
//! Two walks over the same tree type. The lint walk borrows the tree and
//! lets interested rules report findings. The format walk consumes the tree
//! and lets interested format rules replace nodes, so later rules see
//! earlier rewrites. Neither walk runs over a tree with invalid syntax.

mod format;
mod lint;

pub use format::run_format_pipeline;
pub use lint::run_lint_pipeline;

use kerf_ir::SyntaxNode;

use crate::context::Context;
use crate::error::PipelineError;

/// Refuse trees containing `Unknown` nodes.
fn ensure_valid(tree: &SyntaxNode, cx: &Context<'_>) -> Result<(), PipelineError> {
    let Some(offset) = tree.first_invalid_offset() else {
        return Ok(());
    };
    let location = cx.location_of(offset);
    tracing::debug!(%location, "invalid syntax, skipping rules");
    Err(PipelineError::InvalidSyntax {
        line: location.line,
        column: location.column,
    })
}

#[cfg(test)]
mod tests;
