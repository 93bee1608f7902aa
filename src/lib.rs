//! Breast Cancer Dataset Visualizer
//!
//! Opens a CSV dataset, averages a numeric feature per class and shows the
//! result as a bar chart.
//!
//! ## Module Structure
//!
//! - [`config`] - Column names the visualizer reads
//! - [`data`] - CSV loading, header normalization and group-by-mean
//! - [`charts`] - Bar chart model, egui_plot drawing and PNG export
//! - [`analysis`] - Open-and-plot pipeline with its single error boundary
//! - [`gui`] - Main window and chart popup

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
