//! Column Configuration Module
//! Names of the columns the visualizer reads from a dataset.

/// Feature column averaged per class.
pub const FEATURE_COLUMN: &str = "tumorsizenum";
/// Label column rows are grouped by.
pub const LABEL_COLUMN: &str = "class";

/// Which columns hold the numeric feature and the class label.
///
/// The `*_display` names only appear in user-facing messages; lookups always
/// use the normalized `feature_col` / `label_col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub feature_col: String,
    pub label_col: String,
    pub feature_display: String,
    pub label_display: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            feature_col: FEATURE_COLUMN.to_string(),
            label_col: LABEL_COLUMN.to_string(),
            feature_display: "TumorSizeNum".to_string(),
            label_display: "Class".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Required columns, feature first.
    pub fn required_columns(&self) -> [&str; 2] {
        [self.feature_col.as_str(), self.label_col.as_str()]
    }
}
