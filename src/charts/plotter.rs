//! Chart Plotter Module
//! Bar chart model and its interactive rendering with egui_plot.

use crate::config::ColumnConfig;
use crate::data::GroupMeans;
use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, HLine, LineStyle, Plot};
use thiserror::Error;

/// Bar colors, applied alternately in bar order.
pub const BAR_COLORS: [Color32; 2] = [
    Color32::from_rgb(250, 128, 114), // Salmon
    Color32::from_rgb(135, 206, 235), // Sky blue
];

/// Horizontal gridlines: light gray (#b0b0b0), unmultiplied, at 30% opacity.
pub const GRID_RGBA: [u8; 4] = [176, 176, 176, 77];

/// Gridline color for egui.
pub fn grid_color() -> Color32 {
    let [r, g, b, a] = GRID_RGBA;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

const BAR_WIDTH: f64 = 0.5;
const TARGET_TICKS: usize = 6;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no numeric data to plot")]
    NoNumericData,
}

/// Turn a column identifier into display text: `_` and `-` become spaces and
/// every word is title-cased.
pub fn prettify(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_alpha = false;

    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub count: usize,
    pub color: Color32,
}

/// Everything needed to draw the mean-by-class bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

impl ChartData {
    /// Build the chart model from aggregated means.
    pub fn from_group_means(
        means: &GroupMeans,
        config: &ColumnConfig,
    ) -> Result<Self, ChartError> {
        if means.is_empty() {
            return Err(ChartError::NoNumericData);
        }

        let feature = prettify(&config.feature_col);
        let bars = means
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| ChartBar {
                label: entry.label.clone(),
                value: entry.mean,
                count: entry.count,
                color: BAR_COLORS[i % BAR_COLORS.len()],
            })
            .collect();

        Ok(Self {
            title: format!("Breast Cancer: Mean {} by Class", feature),
            x_label: "Class".to_string(),
            y_label: format!("Mean {}", feature),
            bars,
        })
    }

    /// Labels in bar order.
    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|b| b.label.clone()).collect()
    }

    /// Y extent covering zero and every bar, with headroom above the tallest.
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.bars.iter().map(|b| b.value).fold(0.0, f64::min);
        let max = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);

        if max - min <= f64::EPSILON {
            return (0.0, 1.0);
        }

        let pad = (max - min) * 0.05;
        let low = if min < 0.0 { min - pad } else { 0.0 };
        let high = if max > 0.0 { max + pad } else { 0.0 };
        (low, high)
    }

    /// Y positions of the horizontal gridlines.
    pub fn grid_ticks(&self) -> Vec<f64> {
        let (low, high) = self.value_range();
        if !low.is_finite() || !high.is_finite() {
            return Vec::new();
        }
        let step = nice_step(high - low, TARGET_TICKS);
        let first = (low / step).ceil() as i64;
        let last = (high / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Round a raw tick step up to 1, 2 or 5 times a power of ten.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps.max(1) as f64;
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Draws the chart model into an egui ui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bar chart with one bar per class, dashed gridlines behind the bars.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &ChartData) {
        let labels = chart.labels();
        let n = chart.bars.len();
        let (y_min, y_max) = chart.value_range();
        let ticks = chart.grid_ticks();
        let grid = grid_color();

        Plot::new("group_mean_bars")
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-0.5)
            .include_x(n as f64 - 0.5)
            .include_y(y_min)
            .include_y(y_max)
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for tick in ticks {
                    plot_ui.hline(
                        HLine::new(tick)
                            .color(grid)
                            .style(LineStyle::dashed_loose()),
                    );
                }

                let bars: Vec<Bar> = chart
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        Bar::new(i as f64, bar.value)
                            .width(BAR_WIDTH)
                            .fill(bar.color)
                            .name(format!("{} (n = {})", bar.label, bar.count))
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).element_formatter(Box::new(
                    |bar: &Bar, _chart: &BarChart| format!("{}\nmean: {:.3}", bar.name, bar.value),
                )));
            });
    }
}
