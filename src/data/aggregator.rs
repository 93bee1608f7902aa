//! Group Aggregation Module
//! Computes the per-class mean of a numeric column.

use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

const MEAN_ALIAS: &str = "__group_mean";
const COUNT_ALIAS: &str = "__group_count";

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Mean of the feature column for one label value.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
    /// Number of valid numeric values behind `mean`.
    pub count: usize,
}

/// Per-group means ordered by mean, highest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMeans {
    entries: Vec<GroupMean>,
}

impl GroupMeans {
    pub fn entries(&self) -> &[GroupMean] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in result order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Mean for a label, if the group survived aggregation.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.mean)
    }
}

/// Group-by-mean over a loaded table.
pub struct Aggregator;

impl Aggregator {
    /// Group rows by `label_col` and average `feature_col` within each group.
    ///
    /// Labels are compared as text and rows without a label are dropped.
    /// Feature values that are missing or not numeric are left out of the
    /// mean; a group left with no valid values is omitted entirely. Equal
    /// means keep the order in which their groups first appear.
    pub fn group_means(
        df: &DataFrame,
        label_col: &str,
        feature_col: &str,
    ) -> Result<GroupMeans, AggregateError> {
        let grouped = df
            .clone()
            .lazy()
            .select([
                col(label_col).cast(DataType::String),
                col(feature_col).cast(DataType::Float64),
            ])
            .filter(col(label_col).is_not_null())
            .group_by_stable([col(label_col)])
            .agg([
                col(feature_col).mean().alias(MEAN_ALIAS),
                col(feature_col).count().alias(COUNT_ALIAS),
            ])
            .filter(col(MEAN_ALIAS).is_not_null())
            .sort_by_exprs(
                [col(MEAN_ALIAS)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        let labels = grouped.column(label_col)?.str()?;
        let means = grouped.column(MEAN_ALIAS)?.f64()?;
        let counts = grouped.column(COUNT_ALIAS)?.cast(&DataType::UInt64)?;
        let counts = counts.u64()?;

        let entries: Vec<GroupMean> = labels
            .into_iter()
            .zip(means.into_iter())
            .zip(counts.into_iter())
            .filter_map(|((label, mean), count)| {
                Some(GroupMean {
                    label: label?.to_string(),
                    mean: mean?,
                    count: count.unwrap_or(0) as usize,
                })
            })
            .collect();

        debug!(
            "Aggregated {} rows into {} groups by '{}'",
            df.height(),
            entries.len(),
            label_col
        );

        Ok(GroupMeans { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_group_means_basic() {
        let df = polars::df!(
            "class" => ["A", "A", "B"],
            "tumorsizenum" => [10.0, 20.0, 5.0]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.labels(), vec!["A", "B"]);
        assert_close(result.entries()[0].mean, 15.0);
        assert_close(result.entries()[1].mean, 5.0);
        assert_eq!(result.entries()[0].count, 2);
        assert_eq!(result.entries()[1].count, 1);
    }

    #[test]
    fn test_sorted_by_mean_descending() {
        let df = polars::df!(
            "class" => ["low", "high", "low", "mid"],
            "tumorsizenum" => [1.0, 9.0, 3.0, 5.0]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.labels(), vec!["high", "mid", "low"]);
        assert_close(result.get("low").unwrap(), 2.0);
    }

    #[test]
    fn test_integer_feature_column() {
        let df = polars::df!(
            "class" => ["A", "A", "B"],
            "tumorsizenum" => [1i64, 2, 7]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.labels(), vec!["B", "A"]);
        assert_close(result.get("A").unwrap(), 1.5);
    }

    #[test]
    fn test_non_numeric_values_excluded() {
        let df = polars::df!(
            "class" => ["A", "A", "A"],
            "tumorsizenum" => ["10", "abc", "20"]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.len(), 1);
        assert_close(result.get("A").unwrap(), 15.0);
        assert_eq!(result.entries()[0].count, 2);
    }

    #[test]
    fn test_missing_values_excluded() {
        let df = polars::df!(
            "class" => ["A", "A", "B"],
            "tumorsizenum" => [Some(4.0), None, Some(6.0)]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_close(result.get("A").unwrap(), 4.0);
        assert_close(result.get("B").unwrap(), 6.0);
        assert_eq!(result.entries()[1].count, 1);
    }

    #[test]
    fn test_group_without_valid_values_is_omitted() {
        let df = polars::df!(
            "class" => ["A", "C", "C"],
            "tumorsizenum" => [Some(1.0), None, None]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.labels(), vec!["A"]);
        assert!(result.get("C").is_none());
    }

    #[test]
    fn test_rows_without_label_dropped() {
        let df = polars::df!(
            "class" => [Some("A"), None],
            "tumorsizenum" => [1.0, 100.0]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.labels(), vec!["A"]);
        assert_close(result.get("A").unwrap(), 1.0);
    }

    #[test]
    fn test_numeric_labels_grouped_as_text() {
        let df = polars::df!(
            "class" => [0i64, 1, 1],
            "tumorsizenum" => [30.0, 10.0, 20.0]
        )
        .unwrap();

        let result = Aggregator::group_means(&df, "class", "tumorsizenum").unwrap();

        assert_eq!(result.labels(), vec!["0", "1"]);
        assert_close(result.get("1").unwrap(), 15.0);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let df = polars::df!(
            "class" => ["A"],
            "size" => [1.0]
        )
        .unwrap();

        assert!(Aggregator::group_means(&df, "class", "tumorsizenum").is_err());
    }
}
