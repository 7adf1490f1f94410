//! Configuration management and validation.
//!
//! Provides the column layout of the input report, the names of the two
//! generated files, and the formatting rules applied to picked coordinates.

use crate::error::{PickerError, Result};
use crate::models::{Axis, Surface};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output ordering of the axes in the generated files
pub const OUTPUT_AXIS_ORDER: [Axis; 3] = [Axis::Y, Axis::X, Axis::Z];

/// Column names expected in the input report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Identifier column (UPN)
    pub id_column: String,

    /// Boolean detection flag column
    pub detected_column: String,

    /// Prefix of the top surface coordinate columns
    pub top_prefix: String,

    /// Prefix of the bottom surface coordinate columns
    pub bottom_prefix: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            id_column: "UPN".to_string(),
            detected_column: "Detected".to_string(),
            top_prefix: "Top".to_string(),
            bottom_prefix: "Bot".to_string(),
        }
    }
}

impl ColumnLayout {
    /// Column prefix for a surface
    pub fn prefix(&self, surface: Surface) -> &str {
        match surface {
            Surface::Top => &self.top_prefix,
            Surface::Bottom => &self.bottom_prefix,
        }
    }

    /// Column name for one axis of a surface, e.g. `Top_X`
    pub fn coordinate_column(&self, surface: Surface, axis: Axis) -> String {
        format!("{}_{}", self.prefix(surface), axis.label())
    }

    /// All required columns in validation order
    pub fn required_columns(&self) -> Vec<String> {
        let mut columns = vec![self.id_column.clone(), self.detected_column.clone()];
        for surface in [Surface::Top, Surface::Bottom] {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                columns.push(self.coordinate_column(surface, axis));
            }
        }
        columns
    }

    /// Header of a generated file: identifier then (Y, X, Z)
    pub fn output_header(&self, surface: Surface) -> Vec<String> {
        let mut header = vec![self.id_column.clone()];
        header.extend(
            OUTPUT_AXIS_ORDER
                .iter()
                .map(|axis| self.coordinate_column(surface, *axis)),
        );
        header
    }
}

/// Global configuration for report transformation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Input column naming
    pub layout: ColumnLayout,

    /// File name of the top surface output
    pub top_file_name: String,

    /// File name of the bottom surface output
    pub bottom_file_name: String,

    /// Significant digits kept for detected coordinates
    pub significant_digits: usize,

    /// Text written for every coordinate of a non-detected row
    pub masked_value: String,

    /// How many rows with a missing identifier are listed in the error
    pub max_reported_missing_ids: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::default(),
            top_file_name: "Auto Picked Top.csv".to_string(),
            bottom_file_name: "Auto Picked Bottom.csv".to_string(),
            significant_digits: 15,
            masked_value: "0".to_string(),
            max_reported_missing_ids: 10,
        }
    }
}

impl PickerConfig {
    /// Create configuration with a custom column layout
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Create configuration with custom output file names
    pub fn with_file_names(mut self, top: impl Into<String>, bottom: impl Into<String>) -> Self {
        self.top_file_name = top.into();
        self.bottom_file_name = bottom.into();
        self
    }

    /// Create configuration with a custom coordinate precision
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Create configuration with a custom masked coordinate text
    pub fn with_masked_value(mut self, value: impl Into<String>) -> Self {
        self.masked_value = value.into();
        self
    }

    /// Output file name for a surface
    pub fn file_name(&self, surface: Surface) -> &str {
        match surface {
            Surface::Top => &self.top_file_name,
            Surface::Bottom => &self.bottom_file_name,
        }
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if !(1..=17).contains(&self.significant_digits) {
            return Err(PickerError::Configuration {
                message: format!(
                    "significant_digits must be between 1 and 17, got {}",
                    self.significant_digits
                ),
            });
        }

        if self.max_reported_missing_ids == 0 {
            return Err(PickerError::Configuration {
                message: "max_reported_missing_ids must be at least 1".to_string(),
            });
        }

        if self.top_file_name.is_empty() || self.bottom_file_name.is_empty() {
            return Err(PickerError::Configuration {
                message: "output file names must not be empty".to_string(),
            });
        }

        if self.top_file_name == self.bottom_file_name {
            return Err(PickerError::Configuration {
                message: format!(
                    "top and bottom outputs share the file name '{}'",
                    self.top_file_name
                ),
            });
        }

        let required = self.layout.required_columns();
        for (i, name) in required.iter().enumerate() {
            if required[..i].contains(name) {
                return Err(PickerError::Configuration {
                    message: format!("column '{}' is required twice by the layout", name),
                });
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
