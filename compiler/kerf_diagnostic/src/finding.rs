//! Findings: one reported diagnostic each.

use std::fmt;

/// How serious a finding is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    /// Attached context, never reported on its own.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A 1-based line plus a column.
///
/// Columns are 1-based, except that whitespace findings located on a line
/// break use column 0 of the line that follows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Kinds of whitespace discrepancy found by comparing a file with its
/// formatted version.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WhitespaceCategory {
    TrailingWhitespace,
    Indentation,
    Spacing,
    /// Tabs used where spaces separate tokens.
    SpacingCharacter,
    RemoveLine,
    AddLines,
    LineLength,
}

impl WhitespaceCategory {
    pub fn name(self) -> &'static str {
        match self {
            WhitespaceCategory::TrailingWhitespace => "TrailingWhitespace",
            WhitespaceCategory::Indentation => "Indentation",
            WhitespaceCategory::Spacing => "Spacing",
            WhitespaceCategory::SpacingCharacter => "SpacingCharacter",
            WhitespaceCategory::RemoveLine => "RemoveLine",
            WhitespaceCategory::AddLines => "AddLines",
            WhitespaceCategory::LineLength => "LineLength",
        }
    }
}

/// What produced a finding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FindingCategory {
    /// A named rule.
    Rule(&'static str),
    /// The whitespace comparison.
    Whitespace(WhitespaceCategory),
}

impl FindingCategory {
    pub fn name(self) -> &'static str {
        match self {
            FindingCategory::Rule(name) => name,
            FindingCategory::Whitespace(category) => category.name(),
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Machine-readable detail for findings that have one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FindingPayload {
    /// Expected width of indentation or spacing, in columns.
    ExpectedWidth(usize),
    /// Number of line breaks to insert.
    LineBreaks(usize),
}

/// Secondary message attached to a finding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    pub message: String,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Finding {
    pub category: FindingCategory,
    pub message: String,
    pub severity: Severity,
    pub location: Option<Location>,
    pub notes: Vec<Note>,
    pub payload: Option<FindingPayload>,
}

impl Finding {
    /// A warning with no location.
    pub fn new(category: FindingCategory, message: impl Into<String>) -> Self {
        Finding {
            category,
            message: message.into(),
            severity: Severity::Warning,
            location: None,
            notes: Vec::new(),
            payload: None,
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_note(mut self, message: impl Into<String>, location: Option<Location>) -> Self {
        self.notes.push(Note {
            message: message.into(),
            location,
        });
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: FindingPayload) -> Self {
        self.payload = Some(payload);
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}: [{}] {}", self.severity, self.category, self.message)
    }
}

#[cfg(test)]
mod tests;
