//! Visualizer Main Application
//! Single window with one button that opens a dataset and charts it.

use crate::analysis::{self, OpenOutcome};
use crate::config::ColumnConfig;
use crate::gui::ChartViewer;
use egui::RichText;
use tracing::info;

pub const OPEN_BUTTON_LABEL: &str = "Open Breast Cancer Dataset…";
const DIALOG_TITLE: &str = "Open Breast Cancer CSV";

/// What the main window is doing.
pub enum ShellState {
    /// Waiting for a click.
    Idle,
    /// Chart popup open; the open button is disabled until it closes.
    Busy(ChartViewer),
}

/// Main application window.
pub struct VisualizerApp {
    config: ColumnConfig,
    state: ShellState,
}

impl VisualizerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ColumnConfig) -> Self {
        Self {
            config,
            state: ShellState::Idle,
        }
    }

    /// Open dialog, then process the chosen file. Runs to completion on the
    /// UI thread; the dialogs are modal.
    fn handle_open(&mut self) {
        let choice = rfd::FileDialog::new()
            .set_title(DIALOG_TITLE)
            .add_filter("CSV files", &["csv"])
            .pick_file();

        match analysis::run(choice.as_deref(), &self.config) {
            OpenOutcome::Cancelled => {}
            OpenOutcome::Chart(chart) => {
                self.state = ShellState::Busy(ChartViewer::new(chart));
            }
            OpenOutcome::Failed(message) => {
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Error")
                    .set_description(message)
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            }
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let idle = matches!(self.state, ShellState::Idle);
        let mut open_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let button = egui::Button::new(RichText::new(OPEN_BUTTON_LABEL).size(16.0))
                .min_size(egui::vec2(280.0, 40.0));

            // One part free space above the button, two parts below.
            let free = (ui.available_height() - 40.0).max(0.0);
            ui.vertical_centered(|ui| {
                ui.add_space(free / 3.0);
                if ui.add_enabled(idle, button).clicked() {
                    open_clicked = true;
                }
            });
        });

        if open_clicked {
            self.handle_open();
        }

        let closed = match &mut self.state {
            ShellState::Busy(viewer) => !viewer.show(ctx),
            ShellState::Idle => false,
        };
        if closed {
            info!("Chart window closed");
            self.state = ShellState::Idle;
        }
    }
}
