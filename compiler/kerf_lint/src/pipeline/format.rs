use kerf_ir::{SyntaxElement, SyntaxNode};
use kerf_stack::ensure_sufficient_stack;

use crate::context::Context;
use crate::error::PipelineError;
use crate::registry::{rule_index, RULES};

/// Rewrite the tree with every enabled format rule, top down.
///
/// At each node the interested rules run in catalog order; a rule only runs
/// if it is still interested in the node as earlier rules left it. The walk
/// then continues into the children of the rewritten node.
///
/// # Errors
///
/// [`PipelineError::InvalidSyntax`] if the tree contains an `Unknown` node.
/// The tree is not rewritten in that case.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_format_pipeline(tree: SyntaxNode, cx: &Context<'_>) -> Result<SyntaxNode, PipelineError> {
    super::ensure_valid(&tree, cx)?;

    let mut walker = FormatWalker {
        last_offset: 0,
        applied: 0,
    };
    let tree = walker.rewrite(tree, cx);

    tracing::debug!(applied = walker.applied, "format pipeline finished");
    Ok(tree)
}

struct FormatWalker {
    /// Offset of the most recent token with a source position. Synthesized
    /// tokens are placed on this one's line.
    last_offset: u32,
    applied: usize,
}

impl FormatWalker {
    fn rewrite(&mut self, mut node: SyntaxNode, cx: &Context<'_>) -> SyntaxNode {
        if let Some(offset) = node.start_offset() {
            self.last_offset = offset;
        }
        let line = cx.line_of(self.last_offset);

        for &index in rule_index().rules_for(node.kind()) {
            let rule = &RULES[index];
            let Some(rewrite) = rule.rewrite else {
                continue;
            };
            if !rule.is_interested_in(node.kind()) || !cx.is_rule_enabled(rule.name, rule.opt_in, line) {
                continue;
            }
            tracing::trace!(rule = rule.name, kind = %node.kind(), line, "rewriting");
            node = rewrite(node, cx);
            self.applied += 1;
        }

        let kind = node.kind();
        let children: Vec<SyntaxElement> = ensure_sufficient_stack(|| {
            node.into_children()
                .into_iter()
                .map(|child| match child {
                    SyntaxElement::Node(child) => SyntaxElement::Node(self.rewrite(child, cx)),
                    token @ SyntaxElement::Token(_) => token,
                })
                .collect()
        });
        SyntaxNode::new(kind, children)
    }
}
