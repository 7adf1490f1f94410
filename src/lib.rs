//! Point Picker Library
//!
//! Splits a survey detection report (`Final_Report.csv`) into two picked-point
//! coordinate files, one for the top surface and one for the bottom surface.
//!
//! This library provides tools for:
//! - Validating the report schema and identifier column
//! - Normalizing float identifiers to integers
//! - Dropping rows with a zero depth on either surface
//! - Reordering coordinates to (Y, X, Z) and masking non-detected points
//! - Reporting run statistics and data quality warnings
//! - Reading and writing the CSV files around the pure pipeline

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod processor;
pub mod writer;

pub use config::{ColumnLayout, PickerConfig};
pub use error::{ErrorKind, PickerError, Result};
pub use models::{
    Coordinate, InputRecord, InputTable, OutputRecord, PipelineOutput, QualityWarning,
    Statistics, Surface,
};
pub use processor::ReportTransformer;
