//! Findings and their delivery.
//!
//! A [`Finding`] is one reported problem: what reported it (a rule or a
//! whitespace category), a message, a severity, where it is, and optional
//! notes and machine-readable payload. Producers hand findings to a
//! [`FindingEmitter`], which forwards them to a caller-supplied
//! [`FindingSink`]. [`FindingQueue`] is a sink that sorts on flush.
//!
//! Positions are computed with [`span_utils::LineOffsetTable`], built once
//! per file.

pub mod emitter;
mod finding;
pub mod queue;
pub mod span_utils;

pub use emitter::{FindingEmitter, FindingSink};
pub use finding::{
    Finding, FindingCategory, FindingPayload, Location, Note, Severity, WhitespaceCategory,
};
pub use queue::FindingQueue;
