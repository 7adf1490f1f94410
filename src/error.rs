//! Error handling for report transformation.
//!
//! The four data errors (empty input, schema, missing identifier, type
//! conversion) are fatal to a run and are raised before any output is built.
//! The remaining variants belong to the I/O collaborators around the core.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input report is empty")]
    EmptyInput,

    #[error(
        "Missing required columns: {}\nFound columns: {}",
        .missing.join(", "),
        .found.join(", ")
    )]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error(
        "Missing values found in {column} column at rows: {}{}",
        format_rows(.rows),
        overflow_marker(.truncated)
    )]
    MissingIdentifier {
        column: String,
        rows: Vec<usize>,
        truncated: bool,
    },

    #[error("Cannot convert {value:?} in column {column} at row {row} to {target}")]
    TypeConversion {
        column: String,
        row: usize,
        value: String,
        target: &'static str,
    },

    #[error("Input file not found: {path}\nExpected location: {expected}")]
    InputNotFound { path: PathBuf, expected: PathBuf },

    #[error("Output directory does not exist: {path}")]
    OutputDirNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`PickerError`], for callers that map
/// failures to exit codes or dialog titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    Schema,
    MissingIdentifier,
    TypeConversion,
    Io,
    Configuration,
}

impl PickerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PickerError::EmptyInput => ErrorKind::EmptyInput,
            PickerError::Schema { .. } => ErrorKind::Schema,
            PickerError::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            PickerError::TypeConversion { .. } => ErrorKind::TypeConversion,
            PickerError::Io(_)
            | PickerError::Polars(_)
            | PickerError::InputNotFound { .. }
            | PickerError::OutputDirNotFound { .. } => ErrorKind::Io,
            PickerError::Configuration { .. } => ErrorKind::Configuration,
        }
    }
}

fn format_rows(rows: &[usize]) -> String {
    let joined = rows
        .iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn overflow_marker(truncated: &bool) -> &'static str {
    if *truncated { "..." } else { "" }
}

pub type Result<T> = std::result::Result<T, PickerError>;
