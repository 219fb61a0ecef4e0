use pretty_assertions::assert_eq;

use super::*;
use crate::config::Configuration;

fn diff_with(original: &str, formatted: &str, configuration: &Configuration) -> Vec<Finding> {
    let mut findings: Vec<Finding> = Vec::new();
    {
        let mut cx = Context::for_text(configuration, original, &mut findings);
        diff_whitespace(original, formatted, &mut cx);
    }
    findings
}

fn diff(original: &str, formatted: &str) -> Vec<Finding> {
    diff_with(original, formatted, &Configuration::default())
}

/// `(category, line, column, message)` for each finding.
fn summary(findings: &[Finding]) -> Vec<(&'static str, u32, u32, &str)> {
    findings
        .iter()
        .map(|finding| {
            let location = finding.location.unwrap_or(Location::new(0, 0));
            (
                finding.category.name(),
                location.line,
                location.column,
                finding.message.as_str(),
            )
        })
        .collect()
}

#[test]
fn test_identical_text_has_no_findings() {
    for text in [
        "",
        "let a = 1",
        "let a = 1\n\n\nlet b = 2\n",
        "  leading\n\ttabs  \n",
        "a very long line that goes on and on and on and on and on and on and on and on and on forever\n",
        "crlf\r\nline endings \r\n",
    ] {
        assert!(diff(text, text).is_empty(), "findings for {text:?}");
    }
}

#[test]
fn test_spacing_before_colon() {
    let findings = diff("let a : Int = 123", "let a: Int = 123");
    assert_eq!(
        summary(&findings),
        vec![("Spacing", 1, 6, "remove 1 space")]
    );
    assert_eq!(findings[0].payload, Some(FindingPayload::ExpectedWidth(0)));
}

#[test]
fn test_missing_spaces() {
    let findings = diff("a=b", "a = b");
    assert_eq!(
        summary(&findings),
        vec![("Spacing", 1, 2, "add 1 space"), ("Spacing", 1, 3, "add 1 space")]
    );
    assert_eq!(findings[0].payload, Some(FindingPayload::ExpectedWidth(1)));
}

#[test]
fn test_extra_spaces() {
    assert_eq!(
        summary(&diff("let   a = 1", "let a = 1")),
        vec![("Spacing", 1, 4, "remove 2 spaces")]
    );
}

#[test]
fn test_tab_used_for_spacing() {
    assert_eq!(
        summary(&diff("let\ta = 1", "let a = 1")),
        vec![("SpacingCharacter", 1, 4, "use spaces for spacing")]
    );
}

#[test]
fn test_indentation_too_shallow() {
    let findings = diff("struct A {\n var x = 1\n}\n", "struct A {\n  var x = 1\n}\n");
    assert_eq!(
        summary(&findings),
        vec![("Indentation", 2, 1, "indent by 1 space")]
    );
    assert_eq!(findings[0].payload, Some(FindingPayload::ExpectedWidth(2)));
}

#[test]
fn test_indentation_too_deep_with_tabs() {
    let findings = diff("{\n\t\tx\n}", "{\n\tx\n}");
    assert_eq!(summary(&findings), vec![("Indentation", 2, 1, "unindent by 1 tab")]);
    assert_eq!(findings[0].payload, Some(FindingPayload::ExpectedWidth(8)));
}

#[test]
fn test_indentation_messages() {
    assert_eq!(
        summary(&diff("a\n  b", "a\nb")),
        vec![("Indentation", 2, 1, "remove all leading whitespace")]
    );
    assert_eq!(
        summary(&diff("a\n\tb", "a\n  b")),
        vec![("Indentation", 2, 1, "replace leading whitespace with 2 spaces")]
    );
    assert_eq!(
        summary(&diff("a\n\t b", "a\n    b")),
        vec![("Indentation", 2, 1, "replace leading whitespace with 4 spaces")]
    );
}

#[test]
fn test_indentation_of_first_line() {
    assert_eq!(
        summary(&diff("  let a = 1", "let a = 1")),
        vec![("Indentation", 1, 1, "remove all leading whitespace")]
    );
}

#[test]
fn test_trailing_whitespace() {
    assert_eq!(
        summary(&diff("let a = 1  \n", "let a = 1\n")),
        vec![("TrailingWhitespace", 1, 10, "remove trailing whitespace")]
    );
}

#[test]
fn test_trailing_whitespace_before_crlf() {
    assert_eq!(
        summary(&diff("a \r\nb", "a\r\nb")),
        vec![("TrailingWhitespace", 1, 2, "remove trailing whitespace")]
    );
}

#[test]
fn test_remove_line_break() {
    assert_eq!(
        summary(&diff("let a = 1\n\nlet b = 2", "let a = 1\nlet b = 2")),
        vec![("RemoveLine", 2, 0, "remove line break")]
    );
}

#[test]
fn test_remove_line_with_spaces_is_reported_once() {
    assert_eq!(
        summary(&diff("a\n   \n\nb", "a\nb")),
        vec![
            ("RemoveLine", 2, 0, "remove line break"),
            ("RemoveLine", 3, 0, "remove line break"),
        ]
    );
}

#[test]
fn test_add_line_breaks() {
    let findings = diff("a() b()", "a()\nb()");
    assert_eq!(summary(&findings), vec![("AddLines", 1, 4, "add 1 line break")]);
    assert_eq!(findings[0].payload, Some(FindingPayload::LineBreaks(1)));

    assert_eq!(
        summary(&diff("a() b()", "a()\n\n\nb()")),
        vec![("AddLines", 1, 4, "add 3 line breaks")]
    );
}

#[test]
fn test_long_line_suppresses_added_line_breaks() {
    let configuration = Configuration::default().with_line_length(10);
    let findings = diff_with(
        "let abc = 1234567890",
        "let abc =\n  1234567890",
        &configuration,
    );
    assert_eq!(summary(&findings), vec![("LineLength", 1, 1, "line is too long")]);
}

#[test]
fn test_line_break_reported_without_long_line() {
    assert_eq!(
        summary(&diff("let abc = 1234567890", "let abc =\n  1234567890")),
        vec![("AddLines", 1, 10, "add 1 line break")]
    );
}

#[test]
fn test_long_line_flag_ends_at_next_line() {
    let configuration = Configuration::default().with_line_length(10);
    let findings = diff_with(
        "let abc = 1234567890\nf(a) g(b)",
        "let abc =\n  1234567890\nf(a)\ng(b)",
        &configuration,
    );
    assert_eq!(
        summary(&findings),
        vec![
            ("LineLength", 1, 1, "line is too long"),
            ("AddLines", 2, 5, "add 1 line break"),
        ]
    );
}

#[test]
fn test_long_line_that_stays_long_is_not_reported() {
    let configuration = Configuration::default().with_line_length(5);
    assert!(diff_with("let abcdef = 1", "let abcdef = 1", &configuration).is_empty());
    assert_eq!(
        summary(&diff_with("let abcdef  = 1", "let abcdef = 1", &configuration)),
        vec![("Spacing", 1, 11, "remove 1 space")]
    );
}

#[test]
fn test_multibyte_columns() {
    assert_eq!(
        summary(&diff("let é  = 1", "let é = 1")),
        vec![("Spacing", 1, 6, "remove 1 space")]
    );
}

#[test]
#[should_panic(expected = "outside whitespace")]
fn test_non_whitespace_difference_panics() {
    diff("let a = 1", "let b = 1");
}

#[test]
fn test_classify_indent() {
    assert_eq!(classify_indent(""), Some(Indent::Spaces(0)));
    assert_eq!(classify_indent("   "), Some(Indent::Spaces(3)));
    assert_eq!(classify_indent("\t\t"), Some(Indent::Tabs(2)));
    assert_eq!(classify_indent(" \t"), None);
}

#[test]
fn test_locations_when_context_holds_other_text() {
    let configuration = Configuration::default();
    let (original, formatted) = ("a\n\n\nb  = 1", "a\nb = 1");
    let mut findings: Vec<Finding> = Vec::new();
    {
        let mut cx = Context::for_text(&configuration, "unrelated", &mut findings);
        diff_whitespace(original, formatted, &mut cx);
    }
    assert_eq!(summary(&findings), summary(&diff(original, formatted)));
    assert_eq!(
        summary(&findings),
        vec![
            ("RemoveLine", 2, 0, "remove line break"),
            ("RemoveLine", 3, 0, "remove line break"),
            ("Spacing", 4, 2, "remove 1 space"),
        ]
    );
}
