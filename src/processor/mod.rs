//! Report transformation pipeline.
//!
//! Runs validation, identifier normalization, zero-depth filtering,
//! per-row projection with detection masking, and the statistics and
//! quality checks, in that fixed order. The pipeline is a pure function of
//! its input table: it performs no I/O and never mutates the table.

pub mod coercion;
pub mod filter;
pub mod projection;
pub mod quality;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use self::coercion::normalize_identifier;
pub use self::filter::{FilterOutcome, filter_zero_depth};
pub use self::projection::{project_bottom, project_top};
pub use self::quality::{compute_statistics, detect_quality_anomalies};
pub use self::validation::{ColumnIndices, validate};

use crate::config::PickerConfig;
use crate::error::Result;
use crate::models::{InputTable, PipelineOutput};
use tracing::{debug, info};

/// Transforms a detection report into top and bottom picked-point tables
#[derive(Debug, Clone, Default)]
pub struct ReportTransformer {
    config: PickerConfig,
}

impl ReportTransformer {
    /// Create a transformer with the default column layout and formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the transformer
    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// Either every stage succeeds and both output sequences are returned,
    /// or the first fatal error is returned and nothing is built.
    pub fn run(&self, table: &InputTable) -> Result<PipelineOutput> {
        self.config.validate()?;

        let indices = validate(table, &self.config)?;
        info!(
            "Input validated: {} rows, {} columns",
            table.len(),
            table.columns().len()
        );

        let records = coercion::coerce_records(table, &indices)?;
        debug!("Normalized {} identifiers", records.len());

        let FilterOutcome { retained, removed } = filter_zero_depth(&records);
        debug!("{} rows retained, {} removed", retained.len(), removed);

        let top = retained
            .iter()
            .map(|record| project_top(record, &self.config))
            .collect();
        let bottom = retained
            .iter()
            .map(|record| project_bottom(record, &self.config))
            .collect();

        let statistics = compute_statistics(&retained, records.len());
        let warnings = detect_quality_anomalies(&retained);

        Ok(PipelineOutput {
            top,
            bottom,
            statistics,
            warnings,
        })
    }
}
