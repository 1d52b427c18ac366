//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading trade records.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The header row lacks required columns.
    #[error(
        "Missing required columns: {}. Required columns are: {}",
        .missing.join(", "),
        .required.join(", ")
    )]
    MissingColumns {
        /// Required columns absent from the header
        missing: Vec<String>,
        /// Every required column
        required: Vec<String>,
    },

    /// A data row could not be parsed.
    #[error("Error parsing row {row}: {message}")]
    Row {
        /// 1-based line where the record starts; the header is line 1
        row: u64,
        /// Parser message
        message: String,
    },

    /// The source could not be read as CSV.
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}
