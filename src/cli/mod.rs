//! CLI support for qfilter
//!
//! The command functions are plain library calls so the binary stays a thin
//! clap wrapper and other tools can embed the same behavior.

mod convert;
mod docs;
mod tokenize;

pub use convert::{BatchOptions, ConvertOptions, execute_batch, execute_convert, render};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use tokenize::{TokenizeReport, execute_tokenize};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    #[error("Batch input must be a JSON array, got {0}")]
    NotAnArray(&'static str),

    #[error("Unknown category: '{0}'\nRun 'qfilter docs' to see available categories.")]
    UnknownCategory(String),
}
