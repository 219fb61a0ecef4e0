//! `TypeNamesShouldBeCapitalized`: struct and enum names start with an
//! uppercase letter, after any leading underscores.

use kerf_ir::{SyntaxKind, SyntaxNode};

use super::{declared_name, describe_declaration};
use crate::rule::{LintRule, Rule, RuleContext, VisitAction};

pub struct TypeNamesShouldBeCapitalized;

impl Rule for TypeNamesShouldBeCapitalized {
    const NAME: &'static str = "TypeNamesShouldBeCapitalized";
    const KINDS: &'static [SyntaxKind] = &[SyntaxKind::StructDecl, SyntaxKind::EnumDecl];
}

impl LintRule for TypeNamesShouldBeCapitalized {
    fn visit(node: &SyntaxNode, cx: &mut RuleContext<'_, '_>) -> VisitAction {
        let Some(name) = declared_name(node) else {
            return VisitAction::Continue;
        };
        if let Some(suggestion) = capitalized(&name.text) {
            let message = format!(
                "rename the {} '{}' using UpperCamelCase; for example, '{suggestion}'",
                describe_declaration(node),
                name.text
            );
            cx.diagnose_at_token(name, message);
        }
        VisitAction::Continue
    }
}

/// `name` with its first letter uppercased, or `None` if it already is.
fn capitalized(name: &str) -> Option<String> {
    let underscores = name.len() - name.trim_start_matches('_').len();
    let (prefix, rest) = name.split_at(underscores);
    let mut chars = rest.chars();
    let first = chars.next()?;
    let upper: String = first.to_uppercase().collect();
    if upper == first.to_string() {
        return None;
    }
    Some(format!("{prefix}{upper}{}", chars.as_str()))
}
