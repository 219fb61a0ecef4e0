use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use super::*;

#[test]
fn test_rule_names_are_unique() {
    let names: FxHashSet<&str> = RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(names.len(), RULES.len());
}

#[test]
fn test_every_rule_is_interested_in_something() {
    for rule in RULES {
        assert!(!rule.kinds.is_empty(), "{} has no kinds", rule.name);
    }
}

#[test]
fn test_index_lists_rules_in_catalog_order() {
    let index = rule_index();
    let names: Vec<&str> = index
        .rules_for(SyntaxKind::VariableDecl)
        .iter()
        .map(|&i| RULES[i].name)
        .collect();
    assert_eq!(
        names,
        vec![
            "AlwaysUseLowerCamelCase",
            "NeverUseImplicitlyUnwrappedOptionals",
            "NoLeadingUnderscores",
        ]
    );
}

#[test]
fn test_index_is_empty_for_uninteresting_kinds() {
    assert!(rule_index().rules_for(SyntaxKind::IntegerLiteralExpr).is_empty());
}

#[test]
fn test_index_ignores_repeated_kinds() {
    static DUPLICATED: &[SyntaxKind] = &[SyntaxKind::IfStmt, SyntaxKind::IfStmt];
    let mut rule = RULES[0];
    rule.kinds = DUPLICATED;
    let index = RuleIndex::new(&[rule]);
    assert_eq!(index.rules_for(SyntaxKind::IfStmt), &[0]);
}

#[test]
fn test_find_rule() {
    let rule = find_rule("NeverForceUnwrap").map(|rule| (rule.name, rule.opt_in));
    assert_eq!(rule, Some(("NeverForceUnwrap", true)));
    assert!(find_rule("NoSuchRule").is_none());
}

#[test]
fn test_format_rules_have_rewrites() {
    let format_rules: Vec<&str> = RULES
        .iter()
        .filter(|rule| rule.rewrite.is_some())
        .map(|rule| rule.name)
        .collect();
    assert_eq!(
        format_rules,
        vec![
            "DoNotUseSemicolons",
            "NoParensAroundConditions",
            "ReturnVoidInsteadOfEmptyTuple",
        ]
    );
}

#[test]
fn test_opt_in_rules() {
    let opt_in: Vec<&str> = RULES
        .iter()
        .filter(|rule| rule.opt_in)
        .map(|rule| rule.name)
        .collect();
    assert_eq!(
        opt_in,
        vec![
            "NeverForceUnwrap",
            "NeverUseImplicitlyUnwrappedOptionals",
            "NoLeadingUnderscores",
        ]
    );
}
