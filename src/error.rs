//! Fatal conditions for the generator pipeline.
//!
//! Every variant here terminates the run with exit status 1; the wrong
//! argument-count case (exit 2) is owned by clap and never reaches this
//! type. The empty-`$defs` case is a warning, not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("Enums file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read enums file {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed JSON or a `$defs` entry with the wrong shape. The message
    /// carries the JSON-path diagnostic from `serde_path_to_error`.
    #[error("Failed to parse JSON: {0}")]
    InputParse(String),
}
