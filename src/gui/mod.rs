//! GUI module - User interface components

mod app;
mod chart_viewer;

pub use app::{ShellState, VisualizerApp, OPEN_BUTTON_LABEL};
pub use chart_viewer::ChartViewer;
