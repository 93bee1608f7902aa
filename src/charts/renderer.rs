//! Static Chart Renderer
//! Writes the mean-by-class bar chart to a PNG file using plotters.
//!
//! Layout matches the interactive chart: title on top, one bar per class in
//! result order with alternating colors, dashed horizontal gridlines behind
//! the bars, "Class" on the x axis and the prettified feature on the y axis.

use crate::charts::{ChartData, GRID_RGBA};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;
use tracing::info;

/// 7.5 x 5 inches at 150 dpi.
pub const EXPORT_SIZE: (u32, u32) = (1125, 750);

const FONT: &str = "sans-serif";
const BAR_MARGIN: u32 = 40;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `chart` into a PNG at `path`.
    pub fn save_png(chart: &ChartData, path: &Path, size: (u32, u32)) -> anyhow::Result<()> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        let last_index = (chart.bars.len() as u32).saturating_sub(1);
        let (y_min, y_max) = chart.value_range();
        let labels = chart.labels();

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT, 28).into_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d((0u32..last_index).into_segmented(), y_min..y_max)?;

        ctx.configure_mesh()
            .disable_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|x: &SegmentValue<u32>| match x {
                SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .x_desc(&chart.x_label)
            .y_desc(&chart.y_label)
            .axis_desc_style((FONT, 20))
            .label_style((FONT, 16))
            .draw()?;

        let grid_style = Self::grid_style();
        for tick in chart.grid_ticks() {
            ctx.draw_series(DashedLineSeries::new(
                vec![(SegmentValue::Exact(0), tick), (SegmentValue::Last, tick)],
                6,
                4,
                grid_style,
            ))?;
        }

        ctx.draw_series(
            Histogram::vertical(&ctx)
                .style_func(|x, _value| Self::bar_color(chart, x).filled())
                .margin(BAR_MARGIN)
                .data(
                    chart
                        .bars
                        .iter()
                        .enumerate()
                        .map(|(i, bar)| (i as u32, bar.value)),
                ),
        )?;

        root.present()?;
        info!("Saved chart to {}", path.display());
        Ok(())
    }

    fn grid_style() -> ShapeStyle {
        let [r, g, b, a] = GRID_RGBA;
        ShapeStyle::from(&RGBColor(r, g, b).mix(a as f64 / 255.0)).stroke_width(1)
    }

    fn bar_color(chart: &ChartData, x: &SegmentValue<u32>) -> RGBColor {
        let index = match x {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i as usize,
            SegmentValue::Last => chart.bars.len().saturating_sub(1),
        };

        chart
            .bars
            .get(index)
            .map(|bar| RGBColor(bar.color.r(), bar.color.g(), bar.color.b()))
            .unwrap_or(BLACK)
    }
}
