//! Rule orchestration for kerf.
//!
//! # Architecture
//!
//! - [`mask`]: per-rule, per-line overrides from `kerf-disable:` and
//!   `kerf-enable:` comments
//! - [`registry`]: the static rule catalog and its node-kind index
//! - [`pipeline`]: the lint walk (read-only, reports findings) and the
//!   format walk (rewrites the tree)
//! - [`whitespace`]: findings from comparing a file with its formatted text
//! - [`Context`]: one file's configuration, mask, line table and sink
//!
//! [`Linter`] and [`Formatter`] tie these together for a single file.
//!
//! # Example
//!
//! ```
//! use kerf_diagnostic::Finding;
//! use kerf_lint::{Configuration, Linter};
//!
//! let source = "let Total = 1\n";
//! let tree = kerf_parse::parse(source);
//! let configuration = Configuration::default();
//! let printer = |tree: &kerf_ir::SyntaxNode, _: &Configuration| tree.to_string();
//!
//! let mut findings: Vec<Finding> = Vec::new();
//! Linter::new(&configuration)
//!     .lint(&tree, source, &printer, &mut findings)
//!     .unwrap();
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(
//!     findings[0].message,
//!     "rename the constant 'Total' using lowerCamelCase"
//! );
//! ```

pub mod config;
mod context;
mod error;
mod linter;
pub mod mask;
pub mod pipeline;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod whitespace;

pub use config::{Configuration, Indent};
pub use context::Context;
pub use error::PipelineError;
pub use linter::{Formatter, Linter, PrettyPrinter};
pub use mask::{EnablementMask, LineRange, RuleState};
pub use pipeline::{run_format_pipeline, run_lint_pipeline};
pub use registry::{RuleDescriptor, RULES};
pub use rule::{FormatRule, LintRule, Rule, RuleContext, VisitAction};
pub use whitespace::diff_whitespace;
