//! End-to-end runs through `Linter` and `Formatter`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kerf_diagnostic::{Finding, FindingPayload, FindingQueue, FindingSink, Location};
use kerf_ir::SyntaxNode;
use kerf_lint::{Configuration, Formatter, Linter, PipelineError, PrettyPrinter};
use pretty_assertions::assert_eq;

/// A printer that returns fixed text, whatever the tree.
struct Canned(&'static str);

impl PrettyPrinter for Canned {
    fn pretty_print(&self, _tree: &SyntaxNode, _configuration: &Configuration) -> String {
        self.0.to_string()
    }
}

fn identity(tree: &SyntaxNode, _configuration: &Configuration) -> String {
    tree.to_string()
}

fn lint(source: &str, printer: &dyn PrettyPrinter) -> Result<Vec<Finding>, PipelineError> {
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);
    let mut findings: Vec<Finding> = Vec::new();
    Linter::new(&configuration).lint(&tree, source, printer, &mut findings)?;
    Ok(findings)
}

fn summary(findings: &[Finding]) -> Vec<String> {
    findings.iter().map(ToString::to_string).collect()
}

#[test]
fn empty_source_is_skipped() {
    let printer = |_: &SyntaxNode, _: &Configuration| -> String { panic!("printer called") };
    assert!(lint("", &printer).unwrap().is_empty());
}

#[test]
fn rule_findings_come_before_whitespace_findings() {
    let source = "let Total = 1;\nfunc f()  -> () {}\n";
    let findings = lint(source, &Canned("let Total = 1;\nfunc f() -> () {}\n")).unwrap();
    assert_eq!(
        summary(&findings),
        vec![
            "1:14: warning: [DoNotUseSemicolons] remove ';'",
            "1:5: warning: [AlwaysUseLowerCamelCase] rename the constant 'Total' using lowerCamelCase",
            "2:14: warning: [ReturnVoidInsteadOfEmptyTuple] replace '()' with 'Void'",
            "2:9: warning: [Spacing] remove 1 space",
        ]
    );
}

#[test]
fn invalid_syntax_reports_nothing() {
    let source = "let a = 1\nlet b = $\n";
    let printer = |_: &SyntaxNode, _: &Configuration| -> String { panic!("printer called") };
    assert_eq!(
        lint(source, &printer),
        Err(PipelineError::InvalidSyntax { line: 2, column: 9 })
    );
}

#[test]
fn identity_printer_reports_only_rules() {
    let source = "struct point {\n    var x: Int\n}\n";
    let findings = lint(source, &identity).unwrap();
    assert_eq!(
        summary(&findings),
        vec![
            "1:8: warning: [TypeNamesShouldBeCapitalized] rename the struct 'point' using UpperCamelCase; for example, 'Point'"
        ]
    );
}

#[test]
fn indentation_payload_reaches_the_sink() {
    let source = "func f() {\n return\n}\n";
    let findings = lint(source, &Canned("func f() {\n  return\n}\n")).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].location, Some(Location::new(2, 1)));
    assert_eq!(findings[0].message, "indent by 1 space");
    assert_eq!(findings[0].payload, Some(FindingPayload::ExpectedWidth(2)));
}

#[test]
fn queue_sorts_findings_by_location() {
    let source = "let Total = 1;\nfunc f()  -> () {}\n";
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);
    let mut queue = FindingQueue::new();
    let sink: &mut dyn FindingSink = &mut queue;
    Linter::new(&configuration)
        .lint(&tree, source, &Canned("let Total = 1;\nfunc f() -> () {}\n"), sink)
        .unwrap();

    let locations: Vec<Location> = queue.flush().into_iter().filter_map(|f| f.location).collect();
    assert_eq!(
        locations,
        vec![
            Location::new(1, 5),
            Location::new(1, 14),
            Location::new(2, 9),
            Location::new(2, 14),
        ]
    );
}

#[test]
fn formatter_applies_rules() {
    let source = "if (ready) { start(); stop() }\nfunc f() -> () {}\n";
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);
    let formatted = Formatter::new(&configuration).format(tree, source).unwrap();
    assert_eq!(
        formatted.to_string(),
        "if ready { start()\nstop() }\nfunc f() -> Void {}\n"
    );
}

#[test]
fn formatter_respects_configuration() {
    let source = "if (ready) {}\n";
    let configuration = Configuration::default().with_rule("NoParensAroundConditions", false);
    let tree = kerf_parse::parse(source);
    let formatted = Formatter::new(&configuration)
        .format_to_string(tree, source, &identity)
        .unwrap();
    assert_eq!(formatted, source);
}

#[test]
fn formatter_refuses_invalid_syntax() {
    let source = "func f( {\n";
    let configuration = Configuration::default();
    let tree = kerf_parse::parse(source);
    assert!(matches!(
        Formatter::new(&configuration).format(tree, source),
        Err(PipelineError::InvalidSyntax { .. })
    ));
}
