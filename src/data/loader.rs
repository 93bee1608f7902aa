//! CSV Data Loader Module
//! Handles CSV file loading and column-name normalization using Polars.

use crate::config::ColumnConfig;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Positional names given to any table that is exactly three columns wide.
///
/// Datasets exported without usable headers come in as `class, deg-malig,
/// tumorsizenum`. Only the column count is checked; cell contents are never
/// inspected.
pub const THREE_COLUMN_FALLBACK: [&str; 3] = ["class", "deg-malig", "tumorsizenum"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("CSV must contain '{label}' and '{feature}' columns.")]
    MissingColumns {
        label: String,
        feature: String,
        missing: String,
    },
}

/// Normalize a raw header: trim, lowercase, spaces to underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Loads a dataset and brings its headers into the shape the aggregator expects.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file and normalize its column names.
    pub fn load_csv(path: &Path, config: &ColumnConfig) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let mut df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        info!(
            "Loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        Self::normalize(&mut df, config)?;
        debug!("Normalized columns: {:?}", Self::get_columns(&df));
        Ok(df)
    }

    /// Normalize headers in place, apply the three-column fallback and check
    /// that both configured columns are present.
    pub fn normalize(df: &mut DataFrame, config: &ColumnConfig) -> Result<(), LoaderError> {
        let names: Vec<String> = if df.width() == THREE_COLUMN_FALLBACK.len() {
            debug!("Three columns found, renaming positionally");
            THREE_COLUMN_FALLBACK.iter().map(|s| s.to_string()).collect()
        } else {
            df.get_column_names()
                .iter()
                .map(|s| normalize_column_name(s.as_str()))
                .collect()
        };

        df.set_column_names(names)?;

        for required in config.required_columns() {
            if df.column(required).is_err() {
                debug!(
                    "Required column '{}' missing from {:?}",
                    required,
                    Self::get_columns(df)
                );
                return Err(LoaderError::MissingColumns {
                    label: config.label_display.clone(),
                    feature: config.feature_display.clone(),
                    missing: required.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}
