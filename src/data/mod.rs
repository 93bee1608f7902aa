//! Data module - CSV loading and aggregation

mod aggregator;
mod loader;

pub use aggregator::{AggregateError, Aggregator, GroupMean, GroupMeans};
pub use loader::{normalize_column_name, DataLoader, LoaderError, THREE_COLUMN_FALLBACK};
