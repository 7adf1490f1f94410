//! Projection of retained records onto the top and bottom output rows.

use crate::config::{OUTPUT_AXIS_ORDER, PickerConfig};
use crate::format::format_coordinate;
use crate::models::{Axis, InputRecord, OutputRecord, Surface};

/// Project one surface of a record into (Y, X, Z) text, masking non-detected points
pub fn project(record: &InputRecord, surface: Surface, config: &PickerConfig) -> OutputRecord {
    let coordinate = record.surface(surface);
    let [y, x, z] = OUTPUT_AXIS_ORDER.map(|axis: Axis| {
        format_coordinate(
            coordinate.get(axis),
            record.detected,
            config.significant_digits,
            &config.masked_value,
        )
    });

    OutputRecord {
        id: record.id,
        y,
        x,
        z,
    }
}

pub fn project_top(record: &InputRecord, config: &PickerConfig) -> OutputRecord {
    project(record, Surface::Top, config)
}

pub fn project_bottom(record: &InputRecord, config: &PickerConfig) -> OutputRecord {
    project(record, Surface::Bottom, config)
}
