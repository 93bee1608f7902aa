//! Charts module - Chart model and rendering

mod plotter;
mod renderer;

pub use plotter::{
    grid_color, nice_step, prettify, ChartBar, ChartData, ChartError, ChartPlotter, BAR_COLORS,
    GRID_RGBA,
};
pub use renderer::{StaticChartRenderer, EXPORT_SIZE};
