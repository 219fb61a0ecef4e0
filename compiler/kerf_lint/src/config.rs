//! Lint and format configuration.
//!
//! Loading configuration from files is left to callers; this is the
//! in-memory shape they fill in. Rule enablement falls back to each rule's
//! own default when the `rules` map has no entry for it.

use rustc_hash::FxHashMap;

/// Default maximum line length.
pub const MAX_LINE_LENGTH: usize = 100;

/// Default number of columns a tab advances to.
pub const TAB_WIDTH: usize = 8;

/// Default number of consecutive blank lines to keep.
pub const MAXIMUM_BLANK_LINES: usize = 1;

/// One level of indentation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Indent {
    Spaces(usize),
    Tabs(usize),
}

impl Indent {
    pub fn count(self) -> usize {
        match self {
            Indent::Spaces(n) | Indent::Tabs(n) => n,
        }
    }

    /// Width in columns, with tabs counted as `tab_width` each.
    pub fn width(self, tab_width: usize) -> usize {
        match self {
            Indent::Spaces(n) => n,
            Indent::Tabs(n) => n * tab_width,
        }
    }

    /// The character name, pluralized for `count() != 1`.
    pub fn unit_name(self) -> &'static str {
        match (self, self.count()) {
            (Indent::Spaces(_), 1) => "space",
            (Indent::Spaces(_), _) => "spaces",
            (Indent::Tabs(_), 1) => "tab",
            (Indent::Tabs(_), _) => "tabs",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// Configuration for one lint or format run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Configuration {
    /// Per-rule switches, keyed by rule name.
    pub rules: FxHashMap<String, bool>,

    /// Lines longer than this are reported.
    pub line_length: usize,

    /// Indentation the pretty-printer uses for one nesting level.
    pub indentation: Indent,

    /// Columns a tab advances to when measuring indentation.
    pub tab_width: usize,

    /// Consecutive blank lines the pretty-printer keeps.
    pub maximum_blank_lines: usize,

    /// Whether the pretty-printer keeps line breaks present in the source.
    pub respects_existing_line_breaks: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rules: FxHashMap::default(),
            line_length: MAX_LINE_LENGTH,
            indentation: Indent::default(),
            tab_width: TAB_WIDTH,
            maximum_blank_lines: MAXIMUM_BLANK_LINES,
            respects_existing_line_breaks: true,
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    #[must_use]
    pub fn with_indentation(mut self, indentation: Indent) -> Self {
        self.indentation = indentation;
        self
    }

    /// Switch a rule on or off regardless of its default.
    #[must_use]
    pub fn with_rule(mut self, name: &str, enabled: bool) -> Self {
        self.rules.insert(name.to_string(), enabled);
        self
    }

    /// Whether `name` is enabled, using `!opt_in` when it is not configured.
    pub fn is_rule_enabled(&self, name: &str, opt_in: bool) -> bool {
        self.rules.get(name).copied().unwrap_or(!opt_in)
    }
}
