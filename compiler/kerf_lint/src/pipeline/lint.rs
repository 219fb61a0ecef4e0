use kerf_ir::SyntaxNode;
use kerf_stack::ensure_sufficient_stack;

use crate::context::Context;
use crate::error::PipelineError;
use crate::registry::{rule_index, RULES};
use crate::rule::{RuleContext, VisitAction};

/// Show every node to the enabled rules interested in its kind.
///
/// Rules only read the tree; findings go to the context's sink.
///
/// # Errors
///
/// [`PipelineError::InvalidSyntax`] if the tree contains an `Unknown` node.
/// No rule runs in that case.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_lint_pipeline(tree: &SyntaxNode, cx: &mut Context<'_>) -> Result<(), PipelineError> {
    super::ensure_valid(tree, cx)?;

    let mut walker = LintWalker {
        skipped_at: vec![None; RULES.len()],
        last_offset: 0,
    };
    walker.walk(tree, cx, 0);

    tracing::debug!(findings = cx.emitted_count(), "lint pipeline finished");
    Ok(())
}

struct LintWalker {
    /// For each catalog entry, the depth of the node below which the rule
    /// asked not to be called.
    skipped_at: Vec<Option<usize>>,
    /// Offset of the most recent token with a source position.
    last_offset: u32,
}

impl LintWalker {
    fn walk(&mut self, node: &SyntaxNode, cx: &mut Context<'_>, depth: usize) {
        if let Some(offset) = node.start_offset() {
            self.last_offset = offset;
        }
        let line = cx.line_of(self.last_offset);

        for &index in rule_index().rules_for(node.kind()) {
            if self.skipped_at[index].is_some() {
                continue;
            }
            let rule = &RULES[index];
            if !cx.is_rule_enabled(rule.name, rule.opt_in, line) {
                continue;
            }
            let action = (rule.lint)(node, &mut RuleContext::new(cx, rule.name));
            if action == VisitAction::SkipChildren {
                self.skipped_at[index] = Some(depth);
            }
        }

        ensure_sufficient_stack(|| {
            for child in node.child_nodes() {
                self.walk(child, cx, depth + 1);
            }
        });

        for slot in &mut self.skipped_at {
            if *slot == Some(depth) {
                *slot = None;
            }
        }
    }
}
