//! Input schema and content validation.
//!
//! Rules run in dependency order and stop at the first failing one:
//! non-empty table, required columns present, no missing identifiers.

use crate::config::{ColumnLayout, PickerConfig};
use crate::error::{PickerError, Result};
use crate::models::{Axis, InputTable, Surface};
use tracing::debug;

/// Positions of the required columns inside a validated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub id: usize,
    pub detected: usize,
    pub top: [usize; 3],
    pub bottom: [usize; 3],
}

impl ColumnIndices {
    /// Column positions of a surface in (X, Y, Z) order
    pub fn surface(&self, surface: Surface) -> [usize; 3] {
        match surface {
            Surface::Top => self.top,
            Surface::Bottom => self.bottom,
        }
    }
}

/// Validate a table and resolve the required column positions
pub fn validate(table: &InputTable, config: &PickerConfig) -> Result<ColumnIndices> {
    if table.is_empty() {
        return Err(PickerError::EmptyInput);
    }

    let layout = &config.layout;
    let missing: Vec<String> = layout
        .required_columns()
        .into_iter()
        .filter(|name| table.column_index(name).is_none())
        .collect();

    if !missing.is_empty() {
        return Err(PickerError::Schema {
            missing,
            found: table.columns().to_vec(),
        });
    }

    let indices = resolve_indices(table, layout)?;

    let missing_ids: Vec<usize> = (0..table.len())
        .filter(|&row| is_missing(table.cell(row, indices.id)))
        .collect();

    if !missing_ids.is_empty() {
        let limit = config.max_reported_missing_ids;
        return Err(PickerError::MissingIdentifier {
            column: layout.id_column.clone(),
            truncated: missing_ids.len() > limit,
            rows: missing_ids.into_iter().take(limit).collect(),
        });
    }

    debug!(
        "Input validated: {} rows, {} columns",
        table.len(),
        table.columns().len()
    );
    Ok(indices)
}

fn resolve_indices(table: &InputTable, layout: &ColumnLayout) -> Result<ColumnIndices> {
    let find = |name: &str| {
        table.column_index(name).ok_or_else(|| PickerError::Schema {
            missing: vec![name.to_string()],
            found: table.columns().to_vec(),
        })
    };
    let axes = |surface: Surface| -> Result<[usize; 3]> {
        Ok([
            find(&layout.coordinate_column(surface, Axis::X))?,
            find(&layout.coordinate_column(surface, Axis::Y))?,
            find(&layout.coordinate_column(surface, Axis::Z))?,
        ])
    };

    Ok(ColumnIndices {
        id: find(&layout.id_column)?,
        detected: find(&layout.detected_column)?,
        top: axes(Surface::Top)?,
        bottom: axes(Surface::Bottom)?,
    })
}

/// Blank cells count as missing, like an empty CSV field
fn is_missing(cell: Option<&str>) -> bool {
    cell.is_none_or(|value| value.trim().is_empty())
}
