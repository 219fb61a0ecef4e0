use kerf_diagnostic::Finding;
use pretty_assertions::assert_eq;

use super::*;
use crate::config::Configuration;

fn lint(source: &str, configuration: &Configuration) -> (Result<(), PipelineError>, Vec<Finding>) {
    let tree = kerf_parse::parse(source);
    let mut findings: Vec<Finding> = Vec::new();
    let mut cx = Context::new(configuration, source, &tree, &mut findings);
    let result = run_lint_pipeline(&tree, &mut cx);
    (result, findings)
}

fn messages(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|finding| finding.message.as_str()).collect()
}

#[test]
fn test_lint_refuses_invalid_syntax() {
    let (result, findings) = lint("let A = 1\nlet b = $\n", &Configuration::default());
    assert_eq!(result, Err(PipelineError::InvalidSyntax { line: 2, column: 9 }));
    assert!(findings.is_empty());
}

#[test]
fn test_format_refuses_invalid_syntax() {
    let source = "if (x) {}\n}\n";
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);
    let cx = Context::without_sink(&configuration, source, &tree);
    assert_eq!(
        run_format_pipeline(tree, &cx),
        Err(PipelineError::InvalidSyntax { line: 2, column: 1 })
    );
}

#[test]
fn test_invalid_syntax_message() {
    let error = PipelineError::InvalidSyntax { line: 3, column: 7 };
    assert_eq!(error.to_string(), "source contains invalid syntax at 3:7");
}

#[test]
fn test_empty_file() {
    let (result, findings) = lint("", &Configuration::default());
    assert_eq!(result, Ok(()));
    assert!(findings.is_empty());
}

#[test]
fn test_skip_children_is_scoped_to_the_returning_node() {
    let configuration = Configuration::default().with_rule("NeverForceUnwrap", true);
    let (result, findings) = lint("f(a!!, b!)\ng(c!)\n", &configuration);
    assert_eq!(result, Ok(()));
    assert_eq!(
        messages(&findings),
        vec![
            "do not force unwrap 'a!'",
            "do not force unwrap 'b'",
            "do not force unwrap 'c'",
        ]
    );
}

#[test]
fn test_opt_in_rule_needs_configuration_or_directive() {
    let source = "let a = b!\n";
    let (_, findings) = lint(source, &Configuration::default());
    assert!(findings.is_empty());

    let source = "// kerf-enable: NeverForceUnwrap\nlet a = b!\n";
    let (_, findings) = lint(source, &Configuration::default());
    assert_eq!(messages(&findings), vec!["do not force unwrap 'b'"]);
}

#[test]
fn test_directive_overrides_configuration() {
    let configuration = Configuration::default().with_rule("AlwaysUseLowerCamelCase", false);
    let source = "\
let A = 1
// kerf-enable: AlwaysUseLowerCamelCase
let B = 2
";
    let (_, findings) = lint(source, &configuration);
    assert_eq!(
        messages(&findings),
        vec!["rename the constant 'B' using lowerCamelCase"]
    );
}

#[test]
fn test_disabled_block_silences_only_its_lines() {
    let source = "\
let A = 1
// kerf-disable: AlwaysUseLowerCamelCase
let B = 2
// kerf-enable: AlwaysUseLowerCamelCase
let C = 3
";
    let (_, findings) = lint(source, &Configuration::default());
    let lines: Vec<u32> = findings
        .iter()
        .filter_map(|finding| finding.location.map(|location| location.line))
        .collect();
    assert_eq!(lines, vec![1, 5]);
}

#[test]
fn test_findings_carry_the_rule_name() {
    let (_, findings) = lint("struct point {}\n", &Configuration::default());
    let categories: Vec<&str> = findings.iter().map(|finding| finding.category.name()).collect();
    assert_eq!(categories, vec!["TypeNamesShouldBeCapitalized"]);
}

#[test]
fn test_format_rules_compose() {
    let source = "func f() -> () { g(); if ((x)) { h() } }\n";
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);
    let cx = Context::without_sink(&configuration, source, &tree);
    let formatted = run_format_pipeline(tree, &cx).map(|tree| tree.to_string());
    assert_eq!(
        formatted,
        Ok("func f() -> Void { g()\nif x { h() } }\n".to_string())
    );
}

#[test]
fn test_lint_sees_the_original_tree() {
    let source = "if (x) { a(); b() }\n";
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);

    let cx = Context::without_sink(&configuration, source, &tree);
    let formatted = run_format_pipeline(tree.clone(), &cx);
    assert!(formatted.is_ok());

    let mut findings: Vec<Finding> = Vec::new();
    let mut cx = Context::new(&configuration, source, &tree, &mut findings);
    assert_eq!(run_lint_pipeline(&tree, &mut cx), Ok(()));
    assert_eq!(
        messages(&findings),
        vec![
            "remove the parentheses around this expression",
            "remove ';' and move the next statement to a new line",
        ]
    );
}

#[test]
fn test_deeply_nested_expressions() {
    let depth = 10_000;
    let configuration = Configuration::default().with_rule("NeverForceUnwrap", true);

    let source = format!("let a = {}x!{}\n", "(".repeat(depth), ")".repeat(depth));
    let (result, findings) = lint(&source, &configuration);
    assert_eq!(result, Ok(()));
    assert_eq!(messages(&findings), vec!["do not force unwrap 'x'"]);

    let source = format!("if {}x{} {{}}\n", "(".repeat(depth), ")".repeat(depth));
    let tree = kerf_parse::parse(&source);
    let cx = Context::without_sink(&configuration, &source, &tree);
    let formatted = run_format_pipeline(tree, &cx).map(|tree| tree.to_string());
    assert_eq!(formatted, Ok("if x {}\n".to_string()));
}
