//! Pipeline tests for the processor module
//!
//! Builds in-memory report tables and runs them through the full pipeline.


use crate::models::InputTable;

/// Column names of a default-layout report
pub fn report_columns() -> Vec<String> {
    ["UPN", "Detected", "Top_X", "Top_Y", "Top_Z", "Bot_X", "Bot_Y", "Bot_Z"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// One report row in default-layout column order
pub fn row(id: &str, detected: &str, top: [f64; 3], bottom: [f64; 3]) -> Vec<Option<String>> {
    let mut cells = vec![Some(id.to_string()), Some(detected.to_string())];
    cells.extend(top.iter().chain(bottom.iter()).map(|v| Some(v.to_string())));
    cells
}

pub fn table_from(rows: Vec<Vec<Option<String>>>) -> InputTable {
    InputTable::new(report_columns(), rows)
}
