//! `NoLeadingUnderscores`: declared names do not start with `_`.

use kerf_ir::{SyntaxKind, SyntaxNode};

use super::declared_name;
use crate::rule::{LintRule, Rule, RuleContext, VisitAction};

pub struct NoLeadingUnderscores;

impl Rule for NoLeadingUnderscores {
    const NAME: &'static str = "NoLeadingUnderscores";
    const OPT_IN: bool = true;
    const KINDS: &'static [SyntaxKind] = &[
        SyntaxKind::VariableDecl,
        SyntaxKind::FunctionDecl,
        SyntaxKind::FunctionParameter,
        SyntaxKind::StructDecl,
        SyntaxKind::EnumDecl,
        SyntaxKind::EnumCaseElement,
    ];
}

impl LintRule for NoLeadingUnderscores {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        if let Some(name) = declared_name(node) {
            if name.text.starts_with('_') {
                let message = format!("remove the leading '_' from the name '{}'", name.text);
                cx.diagnose_at_token(name, message);
            }
        }
        VisitAction::Continue
    }
}
