// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - cast_possible_truncation: Verb and entry counts are tiny
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Only static regex literals are unwrapped
// - module_name_repetitions: Types like `ErrorRecord` read better in full
// - option_if_let_else: if-let is often clearer
// - must_use_candidate: Builders are annotated where it matters
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::option_if_let_else,
    clippy::must_use_candidate
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod scoring;

pub use error::{AtsError, Result};
pub use models::{Analysis, ErrorRecord, ResumeRecord};
pub use pipeline::Analyzer;
