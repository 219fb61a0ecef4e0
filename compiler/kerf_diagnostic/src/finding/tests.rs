use super::*;

#[test]
fn test_finding_defaults_to_warning() {
    let finding = Finding::new(FindingCategory::Rule("NeverForceUnwrap"), "do not force unwrap 'x'");
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.location, None);
    assert!(finding.notes.is_empty());
}

#[test]
fn test_finding_display_with_location() {
    let finding = Finding::new(
        FindingCategory::Whitespace(WhitespaceCategory::Spacing),
        "remove 1 space",
    )
    .with_location(Location::new(1, 6))
    .with_payload(FindingPayload::ExpectedWidth(0));
    assert_eq!(finding.to_string(), "1:6: warning: [Spacing] remove 1 space");
    assert_eq!(finding.payload, Some(FindingPayload::ExpectedWidth(0)));
}

#[test]
fn test_finding_display_without_location() {
    let finding = Finding::new(FindingCategory::Rule("DoNotUseSemicolons"), "remove ';'")
        .with_severity(Severity::Error);
    assert_eq!(finding.to_string(), "error: [DoNotUseSemicolons] remove ';'");
}

#[test]
fn test_notes_keep_order() {
    let finding = Finding::new(FindingCategory::Rule("R"), "msg")
        .with_note("first", None)
        .with_note("second", Some(Location::new(2, 1)));
    let messages: Vec<&str> = finding.notes.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(finding.notes[1].location, Some(Location::new(2, 1)));
}

#[test]
fn test_locations_order_by_line_then_column() {
    assert!(Location::new(1, 9) < Location::new(2, 0));
    assert!(Location::new(2, 0) < Location::new(2, 1));
}
