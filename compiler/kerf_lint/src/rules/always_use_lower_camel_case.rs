//! `AlwaysUseLowerCamelCase`: values and functions are named in
//! lowerCamelCase.
//!
//! Leading underscores are ignored here; `NoLeadingUnderscores` owns them.

use kerf_ir::{SyntaxKind, SyntaxNode};

use super::{declared_name, describe_declaration};
use crate::rule::{LintRule, Rule, RuleContext, VisitAction};

pub struct AlwaysUseLowerCamelCase;

impl Rule for AlwaysUseLowerCamelCase {
    const NAME: &'static str = "AlwaysUseLowerCamelCase";
    const KINDS: &'static [SyntaxKind] = &[
        SyntaxKind::VariableDecl,
        SyntaxKind::FunctionDecl,
        SyntaxKind::FunctionParameter,
        SyntaxKind::EnumCaseElement,
    ];
}

impl LintRule for AlwaysUseLowerCamelCase {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        if let Some(name) = declared_name(node) {
            if !is_lower_camel_case(&name.text) {
                let message = format!(
                    "rename the {} '{}' using lowerCamelCase",
                    describe_declaration(node),
                    name.text
                );
                cx.diagnose_at_token(name, message);
            }
        }
        VisitAction::Continue
    }
}

fn is_lower_camel_case(name: &str) -> bool {
    let stripped = name.trim_start_matches('_');
    let starts_upper = stripped.chars().next().is_some_and(char::is_uppercase);
    !starts_upper && !stripped.contains('_')
}
