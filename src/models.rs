//! Core data structures for report transformation.
//!
//! Defines the raw input table, the typed records produced from it, the
//! projected output records and the statistics reported for a run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate axis as stored in the input report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Picked surface, each written to its own output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Top,
    Bottom,
}

/// Raw report as read from the source: column names plus text cells.
///
/// Cells are `None` where the source had no value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl InputTable {
    /// Build a table; every row must have one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell text, `None` when missing or out of range
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
}

/// Coordinate triple in storage order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn has_zero_component(&self) -> bool {
        self.x == 0.0 || self.y == 0.0 || self.z == 0.0
    }

    pub fn has_nonzero_component(&self) -> bool {
        self.x != 0.0 || self.y != 0.0 || self.z != 0.0
    }
}

/// One typed row of the report after identifier normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: i64,
    pub detected: bool,
    pub top: Coordinate,
    pub bottom: Coordinate,
}

impl InputRecord {
    pub fn surface(&self, surface: Surface) -> &Coordinate {
        match surface {
            Surface::Top => &self.top,
            Surface::Bottom => &self.bottom,
        }
    }
}

/// One row of a generated file, coordinates already rendered in (Y, X, Z) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: i64,
    pub y: String,
    pub x: String,
    pub z: String,
}

/// Processing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Rows in the source table
    pub source_rows: usize,
    /// Rows dropped for a zero depth on either surface
    pub zero_depth_removed: usize,
    /// Rows retained after filtering
    pub input_rows: usize,
    pub top_output_rows: usize,
    pub bottom_output_rows: usize,
    pub detected_count: usize,
    pub non_detected_count: usize,
}

/// Non-fatal data quality finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityWarning {
    /// Detected rows with a zero top coordinate
    DetectedWithZeroCoordinate { count: usize },
    /// Non-detected rows that still carry top coordinate data
    NonDetectedWithCoordinates { count: usize },
}

impl fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityWarning::DetectedWithZeroCoordinate { count } => {
                write!(f, "{} rows have Detected=True but zero coordinates", count)
            }
            QualityWarning::NonDetectedWithCoordinates { count } => {
                write!(
                    f,
                    "{} rows have Detected=False but non-zero coordinates",
                    count
                )
            }
        }
    }
}

/// Everything a run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub top: Vec<OutputRecord>,
    pub bottom: Vec<OutputRecord>,
    pub statistics: Statistics,
    pub warnings: Vec<QualityWarning>,
}

impl PipelineOutput {
    pub fn records(&self, surface: Surface) -> &[OutputRecord] {
        match surface {
            Surface::Top => &self.top,
            Surface::Bottom => &self.bottom,
        }
    }
}
