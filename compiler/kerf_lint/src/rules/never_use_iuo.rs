//! `NeverUseImplicitlyUnwrappedOptionals`: variables are not annotated
//! with `T!`.

use kerf_ir::{SyntaxKind, SyntaxNode};

use crate::rule::{LintRule, Rule, RuleContext, VisitAction};

pub struct NeverUseImplicitlyUnwrappedOptionals;

impl Rule for NeverUseImplicitlyUnwrappedOptionals {
    const NAME: &'static str = "NeverUseImplicitlyUnwrappedOptionals";
    const OPT_IN: bool = true;
    const KINDS: &'static [SyntaxKind] = &[SyntaxKind::VariableDecl];
}

impl LintRule for NeverUseImplicitlyUnwrappedOptionals {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        let annotated = node
            .child_node(SyntaxKind::TypeAnnotation)
            .and_then(|annotation| annotation.child_nodes().next());
        let Some(ty) = annotated else {
            return VisitAction::Continue;
        };
        if ty.kind() == SyntaxKind::ImplicitlyUnwrappedOptionalType {
            let wrapped = ty
                .child_nodes()
                .next()
                .map(SyntaxNode::trimmed_text)
                .unwrap_or_default();
            cx.diagnose_at_node(
                ty,
                format!("use '{wrapped}' or '{wrapped}?' instead of '{wrapped}!'"),
            );
        }
        VisitAction::Continue
    }
}
