//! CSV output of the picked top and bottom tables.
//!
//! Both files are fully written to temporary files in the output directory
//! before either is moved into place. If the bottom file cannot be moved,
//! the already moved top file is removed again, so a failed run never leaves
//! a mismatched pair behind.

use crate::config::PickerConfig;
use crate::error::{PickerError, Result};
use crate::models::{OutputRecord, PipelineOutput, Surface};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Paths and row counts of the written files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub top_path: PathBuf,
    pub top_rows: usize,
    pub bottom_path: PathBuf,
    pub bottom_rows: usize,
}

/// Build the output frame of one surface: identifier then (Y, X, Z) text columns
pub fn output_frame(
    records: &[OutputRecord],
    surface: Surface,
    config: &PickerConfig,
) -> Result<DataFrame> {
    let header = config.layout.output_header(surface);
    let ids: Vec<i64> = records.iter().map(|record| record.id).collect();
    let ys: Vec<String> = records.iter().map(|record| record.y.clone()).collect();
    let xs: Vec<String> = records.iter().map(|record| record.x.clone()).collect();
    let zs: Vec<String> = records.iter().map(|record| record.z.clone()).collect();

    let df = DataFrame::new(vec![
        Column::new(header[0].as_str().into(), ids),
        Column::new(header[1].as_str().into(), ys),
        Column::new(header[2].as_str().into(), xs),
        Column::new(header[3].as_str().into(), zs),
    ])?;
    Ok(df)
}

/// Write both output tables into `output_dir`
pub fn write_outputs(
    output: &PipelineOutput,
    output_dir: &Path,
    config: &PickerConfig,
) -> Result<WrittenFiles> {
    if !output_dir.is_dir() {
        return Err(PickerError::OutputDirNotFound {
            path: output_dir.to_path_buf(),
        });
    }

    let top_tmp = write_temp(
        output.records(Surface::Top),
        Surface::Top,
        output_dir,
        config,
    )?;
    let bottom_tmp = write_temp(
        output.records(Surface::Bottom),
        Surface::Bottom,
        output_dir,
        config,
    )?;

    let top_path = output_dir.join(config.file_name(Surface::Top));
    let bottom_path = output_dir.join(config.file_name(Surface::Bottom));
    top_tmp
        .persist(&top_path)
        .map_err(|e| PickerError::Io(e.error))?;
    if let Err(e) = bottom_tmp.persist(&bottom_path) {
        // Never leave a new top file beside a stale or missing bottom file
        if let Err(cleanup) = std::fs::remove_file(&top_path) {
            warn!(
                "Failed to remove {} after bottom write failed: {}",
                top_path.display(),
                cleanup
            );
        }
        return Err(PickerError::Io(e.error));
    }

    let written = WrittenFiles {
        top_path,
        top_rows: output.top.len(),
        bottom_path,
        bottom_rows: output.bottom.len(),
    };
    info!(
        "Written: {} ({} rows)",
        written.top_path.display(),
        written.top_rows
    );
    info!(
        "Written: {} ({} rows)",
        written.bottom_path.display(),
        written.bottom_rows
    );
    Ok(written)
}

fn write_temp(
    records: &[OutputRecord],
    surface: Surface,
    output_dir: &Path,
    config: &PickerConfig,
) -> Result<NamedTempFile> {
    let mut df = output_frame(records, surface, config)?;
    let mut file = NamedTempFile::new_in(output_dir)?;

    CsvWriter::new(file.as_file_mut())
        .include_header(true)
        .finish(&mut df)?;
    file.as_file_mut().sync_all()?;

    debug!(
        "Staged {:?} output ({} rows) at {}",
        surface,
        records.len(),
        file.path().display()
    );
    Ok(file)
}
