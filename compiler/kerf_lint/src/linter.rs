//! Front doors: lint or format one file.

use kerf_diagnostic::FindingSink;
use kerf_ir::SyntaxNode;

use crate::config::Configuration;
use crate::context::Context;
use crate::error::PipelineError;
use crate::pipeline::{run_format_pipeline, run_lint_pipeline};
use crate::registry::find_rule;
use crate::whitespace::diff_whitespace;

/// Renders a tree as canonically formatted text.
pub trait PrettyPrinter {
    fn pretty_print(&self, tree: &SyntaxNode, configuration: &Configuration) -> String;
}

impl<F> PrettyPrinter for F
where
    F: Fn(&SyntaxNode, &Configuration) -> String,
{
    fn pretty_print(&self, tree: &SyntaxNode, configuration: &Configuration) -> String {
        self(tree, configuration)
    }
}

/// Configured rule names that match no rule in the catalog.
fn unknown_rules(configuration: &Configuration) -> impl Iterator<Item = &str> {
    configuration
        .rules
        .keys()
        .map(String::as_str)
        .filter(|name| find_rule(name).is_none())
}

fn warn_unknown_rules(configuration: &Configuration) {
    for name in unknown_rules(configuration) {
        tracing::warn!(rule = name, "configuration names an unknown rule");
    }
}

/// Runs the rules and the whitespace check over a file.
pub struct Linter<'c> {
    configuration: &'c Configuration,
}

impl<'c> Linter<'c> {
    pub fn new(configuration: &'c Configuration) -> Self {
        warn_unknown_rules(configuration);
        Linter { configuration }
    }

    /// Report rule findings for `tree`, then whitespace findings from
    /// comparing `source` with `printer`'s rendering of the same tree.
    ///
    /// An empty source produces no findings.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidSyntax`] if `tree` contains invalid syntax.
    /// Nothing is reported in that case.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn lint(
        &self,
        tree: &SyntaxNode,
        source: &str,
        printer: &dyn PrettyPrinter,
        sink: &mut dyn FindingSink,
    ) -> Result<(), PipelineError> {
        if source.is_empty() {
            return Ok(());
        }
        let mut cx = Context::new(self.configuration, source, tree, sink);
        run_lint_pipeline(tree, &mut cx)?;

        let formatted = printer.pretty_print(tree, self.configuration);
        diff_whitespace(source, &formatted, &mut cx);
        Ok(())
    }
}

/// Applies the format rules to a file.
pub struct Formatter<'c> {
    configuration: &'c Configuration,
}

impl<'c> Formatter<'c> {
    pub fn new(configuration: &'c Configuration) -> Self {
        warn_unknown_rules(configuration);
        Formatter { configuration }
    }

    /// `tree` with every enabled format rule applied.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidSyntax`] if `tree` contains invalid syntax.
    pub fn format(&self, tree: SyntaxNode, source: &str) -> Result<SyntaxNode, PipelineError> {
        let cx = Context::without_sink(self.configuration, source, &tree);
        run_format_pipeline(tree, &cx)
    }

    /// Format rules followed by pretty printing.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidSyntax`] if `tree` contains invalid syntax.
    pub fn format_to_string(
        &self,
        tree: SyntaxNode,
        source: &str,
        printer: &dyn PrettyPrinter,
    ) -> Result<String, PipelineError> {
        let tree = self.format(tree, source)?;
        Ok(printer.pretty_print(&tree, self.configuration))
    }
}
