use super::*;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1); // 'l' of line1
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_to_line_col_counts_characters() {
    let source = "αβ x";
    let table = LineOffsetTable::build(source);
    // 'x' is at byte 5 but character column 4
    assert_eq!(table.offset_to_line_col(source, 5), (1, 4));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 40), (1, 3));
}

#[test]
fn test_trailing_newline_adds_empty_line() {
    let table = LineOffsetTable::build("line1\nline2\n");
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.last_line(), 3);
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn test_line_start_offset() {
    let table = LineOffsetTable::build("a\nbb\nccc");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.line_start_offset(3), Some(5));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_empty_source_has_one_line() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
}
