//! Chart Viewer Window
//! Popup viewport showing the bar chart, with PNG export.

use crate::charts::{ChartData, ChartPlotter, StaticChartRenderer, EXPORT_SIZE};
use egui::{Color32, RichText};
use tracing::{error, info};

const WINDOW_SIZE: [f32; 2] = [750.0, 500.0];

/// Popup window for one chart. Lives until the user closes it.
pub struct ChartViewer {
    pub chart: ChartData,
    status: Option<(String, bool)>,
}

impl ChartViewer {
    pub fn new(chart: ChartData) -> Self {
        Self {
            chart,
            status: None,
        }
    }

    /// Draw the popup. Returns `false` once the user has closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let title = self.chart.title.clone();

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("chart_viewer"),
            egui::ViewportBuilder::default()
                .with_title(title.clone())
                .with_inner_size(WINDOW_SIZE),
            |ctx, class| {
                if class == egui::ViewportClass::Embedded {
                    // Backend without multiple native windows.
                    egui::Window::new(title.clone())
                        .open(&mut open)
                        .default_size(WINDOW_SIZE)
                        .show(ctx, |ui| self.contents(ui));
                } else {
                    egui::CentralPanel::default().show(ctx, |ui| self.contents(ui));
                    if ctx.input(|i| i.viewport().close_requested()) {
                        open = false;
                    }
                }
            },
        );

        open
    }

    fn contents(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("💾 Save PNG…").clicked() {
                self.handle_save_png();
            }
            if let Some((message, is_error)) = &self.status {
                let color = if *is_error {
                    Color32::from_rgb(220, 53, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(message).size(12.0).color(color));
            }
        });
        ui.separator();

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.chart.title).size(16.0).strong());
        });
        ChartPlotter::draw_bar_chart(ui, &self.chart);
    }

    fn handle_save_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Images", &["png"])
            .set_file_name("mean_by_class.png")
            .set_title("Save Chart")
            .save_file()
        else {
            return;
        };

        self.status = match StaticChartRenderer::save_png(&self.chart, &path, EXPORT_SIZE) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                Some((format!("Saved {}", name), false))
            }
            Err(e) => {
                error!("PNG export failed: {:#}", e);
                Some((format!("Save failed: {}", e), true))
            }
        };
        info!("PNG export finished");
    }
}
