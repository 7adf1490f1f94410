//! Loading of the input report from CSV.
//!
//! Every column is read as text so that coercion and its error reporting
//! stay in the pipeline; empty fields become missing cells.

use crate::error::{PickerError, Result};
use crate::models::InputTable;
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Read a comma-separated report with a header row into an [`InputTable`]
pub fn load_report(path: &Path) -> Result<InputTable> {
    // Polars rejects a zero-byte file with a generic error
    if std::fs::metadata(path)?.len() == 0 {
        return Err(PickerError::EmptyInput);
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let table = table_from_frame(&df)?;
    debug!(
        "Loaded {} rows and {} columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Convert a frame into text cells, column by column
pub fn table_from_frame(df: &DataFrame) -> Result<InputTable> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows: Vec<Vec<Option<String>>> =
        vec![Vec::with_capacity(columns.len()); df.height()];

    for column in df.get_columns() {
        let text = column.cast(&DataType::String)?;
        let values = text.as_materialized_series().str()?;
        for (cells, value) in rows.iter_mut().zip(values.into_iter()) {
            cells.push(value.map(str::to_string));
        }
    }

    Ok(InputTable::new(columns, rows))
}
