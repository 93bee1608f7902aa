//! Open-and-plot pipeline.
//!
//! Chains loader, aggregator and chart model for one chosen file. This is the
//! only place errors are caught: every failure becomes the text of a single
//! error dialog.

use crate::charts::{ChartData, ChartError};
use crate::config::ColumnConfig;
use crate::data::{AggregateError, Aggregator, DataLoader, LoaderError};
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Result of one click on the open button.
#[derive(Debug)]
pub enum OpenOutcome {
    /// The file dialog was dismissed.
    Cancelled,
    Chart(ChartData),
    /// Text for the error dialog.
    Failed(String),
}

/// Load, aggregate and build the chart model for `path`.
pub fn process_file(path: &Path, config: &ColumnConfig) -> Result<ChartData, AnalysisError> {
    let df = DataLoader::load_csv(path, config)?;
    let means = Aggregator::group_means(&df, &config.label_col, &config.feature_col)?;
    let chart = ChartData::from_group_means(&means, config)?;
    Ok(chart)
}

/// Dialog body for a failed open.
pub fn error_message(err: &AnalysisError) -> String {
    format!("Error loading or plotting file:\n{}", err)
}

/// Handle the outcome of the file dialog.
pub fn run(choice: Option<&Path>, config: &ColumnConfig) -> OpenOutcome {
    let Some(path) = choice else {
        info!("File dialog cancelled");
        return OpenOutcome::Cancelled;
    };

    match process_file(path, config) {
        Ok(chart) => {
            info!("Charting {} groups from {}", chart.bars.len(), path.display());
            OpenOutcome::Chart(chart)
        }
        Err(e) => {
            error!("Failed to process {}: {}", path.display(), e);
            OpenOutcome::Failed(error_message(&e))
        }
    }
}
