//! Whitespace linting by comparison with formatted text.
//!
//! The formatted text must differ from the original only inside whitespace
//! runs. Both texts are walked in step, one whitespace run at a time, and
//! each pair of runs is checked for the kinds of discrepancy in
//! [`WhitespaceCategory`]. Findings point into the original text.
//!
//! A run is split on `\n` into segments: `"\n  "` gives `["", "  "]` and
//! `""` gives `[""]`. All segments but the last end at a line break; the
//! last is the indentation (or spacing) before the next character.

use kerf_diagnostic::span_utils::LineOffsetTable;
use kerf_diagnostic::{Finding, FindingCategory, FindingPayload, Location, WhitespaceCategory};
use smallvec::SmallVec;

use crate::config::Indent;
use crate::context::Context;

type Segments<'s> = SmallVec<[&'s str; 4]>;

/// Report how `original` differs from `formatted` in whitespace.
///
/// # Panics
///
/// If the two texts differ in anything other than whitespace.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(original_len = original.len(), formatted_len = formatted.len())
)]
pub fn diff_whitespace(original: &str, formatted: &str, cx: &mut Context<'_>) {
    let non_whitespace = |c: &char| !is_whitespace(*c);
    assert!(
        original
            .chars()
            .filter(non_whitespace)
            .eq(formatted.chars().filter(non_whitespace)),
        "formatted text differs from the original outside whitespace"
    );

    let lines = (cx.source() != original).then(|| LineOffsetTable::build(original));
    let mut differ = WhitespaceDiffer {
        original,
        formatted,
        lines,
        line_length: cx.configuration().line_length,
        tab_width: cx.configuration().tab_width,
        line_too_long: false,
        cx,
    };
    differ.run();
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// End of the whitespace run starting at `start`.
fn whitespace_end(text: &str, start: usize) -> usize {
    text[start..]
        .find(|c: char| !is_whitespace(c))
        .map_or(text.len(), |len| start + len)
}

/// Text from `start` to the end of its line, without the line break.
fn rest_of_line(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    let line = memchr::memchr(b'\n', rest.as_bytes()).map_or(rest, |end| &rest[..end]);
    line.strip_suffix('\r').unwrap_or(line)
}

/// A run of indentation made of one character, or `None` if it mixes
/// spaces and tabs.
fn classify_indent(indent: &str) -> Option<Indent> {
    if indent.bytes().all(|b| b == b' ') {
        Some(Indent::Spaces(indent.len()))
    } else if indent.bytes().all(|b| b == b'\t') {
        Some(Indent::Tabs(indent.len()))
    } else {
        None
    }
}

fn indentation_message(expected: &str, actual: &str) -> String {
    match (classify_indent(expected), classify_indent(actual)) {
        (Some(expected), _) if expected.count() == 0 => "remove all leading whitespace".to_string(),
        (Some(expected), Some(actual)) if same_unit(expected, actual) => {
            let (verb, diff) = if expected.count() > actual.count() {
                ("indent", expected.count() - actual.count())
            } else {
                ("unindent", actual.count() - expected.count())
            };
            let unit = match expected {
                Indent::Spaces(_) => Indent::Spaces(diff),
                Indent::Tabs(_) => Indent::Tabs(diff),
            };
            format!("{verb} by {diff} {}", unit.unit_name())
        }
        (Some(expected), _) => format!(
            "replace leading whitespace with {} {}",
            expected.count(),
            expected.unit_name()
        ),
        (None, _) => "replace leading whitespace to match the expected indentation".to_string(),
    }
}

fn same_unit(a: Indent, b: Indent) -> bool {
    matches!(
        (a, b),
        (Indent::Spaces(_), Indent::Spaces(_)) | (Indent::Tabs(_), Indent::Tabs(_))
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

struct WhitespaceDiffer<'s, 'c, 'a> {
    original: &'s str,
    formatted: &'s str,
    /// Line table for `original` when it is not the context's source.
    lines: Option<LineOffsetTable>,
    line_length: usize,
    tab_width: usize,
    /// Set when a line-length finding was reported at the most recent line
    /// start. Suppresses add-line findings until the next line start.
    line_too_long: bool,
    cx: &'c mut Context<'a>,
}

/// One pair of corresponding whitespace runs.
struct RunPair<'s> {
    /// Offset of the original run.
    offset: usize,
    /// Offset of the formatted run.
    formatted_offset: usize,
    original: &'s str,
    formatted: &'s str,
    original_segments: Segments<'s>,
    formatted_segments: Segments<'s>,
    is_first_character: bool,
}

impl RunPair<'_> {
    fn is_line_start(&self) -> bool {
        let (o, f) = (self.original_segments.len(), self.formatted_segments.len());
        (o > 1 && f > 1) || (self.is_first_character && o == 1 && f == 1)
    }

    /// Offset in the original text where segment `index` begins.
    fn segment_offset(&self, index: usize) -> usize {
        self.offset
            + self.original_segments[..index]
                .iter()
                .map(|segment| segment.len() + 1)
                .sum::<usize>()
    }

    fn original_last(&self) -> &str {
        self.original_segments.last().copied().unwrap_or_default()
    }

    fn formatted_last(&self) -> &str {
        self.formatted_segments.last().copied().unwrap_or_default()
    }

    /// Leading original segments that have no formatted counterpart.
    fn excess_segments(&self) -> usize {
        self.original_segments
            .len()
            .saturating_sub(self.formatted_segments.len())
    }
}

impl<'s> WhitespaceDiffer<'s, '_, '_> {
    fn run(&mut self) {
        let (original_text, formatted_text) = (self.original, self.formatted);
        let mut offset = 0;
        let mut formatted_offset = 0;
        loop {
            let original_end = whitespace_end(original_text, offset);
            let formatted_end = whitespace_end(formatted_text, formatted_offset);
            let original = &original_text[offset..original_end];
            let formatted = &formatted_text[formatted_offset..formatted_end];
            let pair = RunPair {
                offset,
                formatted_offset,
                original,
                formatted,
                original_segments: original.split('\n').collect(),
                formatted_segments: formatted.split('\n').collect(),
                is_first_character: offset == 0,
            };
            self.check(&pair);

            let Some(next) = original_text[original_end..].chars().next() else {
                break;
            };
            offset = original_end + next.len_utf8();
            formatted_offset = formatted_end + next.len_utf8();
        }
    }

    fn check(&mut self, pair: &RunPair<'s>) {
        if pair.is_line_start() {
            self.check_line_length(pair);
        }
        if pair.original == pair.formatted {
            return;
        }
        if pair.is_line_start() {
            self.check_indentation(pair);
        }
        self.check_trailing_whitespace(pair);
        self.check_spacing(pair);
        self.check_remove_line(pair);
        self.check_add_lines(pair);
    }

    fn check_line_length(&mut self, pair: &RunPair<'s>) {
        let line_start = pair.segment_offset(pair.original_segments.len() - 1);
        let formatted_start =
            pair.formatted_offset + pair.formatted.len() - pair.formatted_last().len();
        let original_width = rest_of_line(self.original, line_start).chars().count();
        let formatted_width = rest_of_line(self.formatted, formatted_start).chars().count();

        self.line_too_long = original_width > self.line_length && formatted_width <= self.line_length;
        if self.line_too_long {
            self.report(WhitespaceCategory::LineLength, "line is too long", line_start, None);
        }
    }

    fn check_indentation(&mut self, pair: &RunPair<'s>) {
        let (actual, expected) = (pair.original_last(), pair.formatted_last());
        if actual == expected {
            return;
        }
        let width = classify_indent(expected).map_or_else(
            || expected.chars().map(|c| if c == '\t' { self.tab_width } else { 1 }).sum(),
            |indent| indent.width(self.tab_width),
        );
        let offset = pair.segment_offset(pair.original_segments.len() - 1);
        self.report(
            WhitespaceCategory::Indentation,
            indentation_message(expected, actual),
            offset,
            Some(FindingPayload::ExpectedWidth(width)),
        );
    }

    fn check_trailing_whitespace(&mut self, pair: &RunPair<'s>) {
        let interior = pair.original_segments.len() - 1;
        for index in pair.excess_segments()..interior {
            let segment = pair.original_segments[index];
            if segment.strip_suffix('\r').unwrap_or(segment).is_empty() {
                continue;
            }
            let offset = pair.segment_offset(index);
            self.report(
                WhitespaceCategory::TrailingWhitespace,
                "remove trailing whitespace",
                offset,
                None,
            );
        }
    }

    fn check_spacing(&mut self, pair: &RunPair<'s>) {
        if pair.is_first_character
            || pair.original_segments.len() != 1
            || pair.formatted_segments.len() != 1
        {
            return;
        }
        if pair.original.contains('\t') {
            self.report(
                WhitespaceCategory::SpacingCharacter,
                "use spaces for spacing",
                pair.offset,
                None,
            );
            return;
        }
        let (actual, expected) = (pair.original.len(), pair.formatted.len());
        let message = match expected.cmp(&actual) {
            std::cmp::Ordering::Greater => format!("add {}", plural(expected - actual, "space", "spaces")),
            std::cmp::Ordering::Less => format!("remove {}", plural(actual - expected, "space", "spaces")),
            std::cmp::Ordering::Equal => return,
        };
        self.report(
            WhitespaceCategory::Spacing,
            message,
            pair.offset,
            Some(FindingPayload::ExpectedWidth(expected)),
        );
    }

    fn check_remove_line(&mut self, pair: &RunPair<'s>) {
        for index in 0..pair.excess_segments() {
            let line_break = pair.segment_offset(index) + pair.original_segments[index].len();
            self.report(WhitespaceCategory::RemoveLine, "remove line break", line_break, None);
        }
    }

    fn check_add_lines(&mut self, pair: &RunPair<'s>) {
        let missing = pair
            .formatted_segments
            .len()
            .saturating_sub(pair.original_segments.len());
        if missing == 0 || self.line_too_long {
            return;
        }
        self.report(
            WhitespaceCategory::AddLines,
            format!("add {}", plural(missing, "line break", "line breaks")),
            pair.offset,
            Some(FindingPayload::LineBreaks(missing)),
        );
    }

    fn report(
        &mut self,
        category: WhitespaceCategory,
        message: impl Into<String>,
        offset: usize,
        payload: Option<FindingPayload>,
    ) {
        let mut finding = Finding::new(FindingCategory::Whitespace(category), message)
            .with_location(self.location_at(offset));
        if let Some(payload) = payload {
            finding = finding.with_payload(payload);
        }
        self.cx.emit(finding);
    }

    /// A line break is reported at column 0 of the line it starts.
    fn location_at(&self, offset: usize) -> Location {
        let lines = self.lines.as_ref().unwrap_or_else(|| self.cx.lines());
        let offset32 = u32::try_from(offset).unwrap_or(u32::MAX);
        if self.original.as_bytes().get(offset) == Some(&b'\n') {
            return Location::new(lines.line_from_offset(offset32) + 1, 0);
        }
        let (line, column) = lines.offset_to_line_col(self.original, offset32);
        Location::new(line, column)
    }
}

#[cfg(test)]
mod tests;
