//! Breast Cancer Dataset Visualizer
//!
//! Desktop entry point: one window, one button, one chart.

use breast_visualizer::config::ColumnConfig;
use breast_visualizer::gui::VisualizerApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 520.0])
            .with_min_inner_size([760.0, 480.0])
            .with_title("Breast Cancer Dataset Visualizer"),
        centered: true,
        ..Default::default()
    };

    let config = ColumnConfig::default();
    tracing::info!(
        "Charting mean '{}' by '{}'",
        config.feature_col,
        config.label_col
    );

    eframe::run_native(
        "Breast Cancer Dataset Visualizer",
        options,
        Box::new(|cc| Ok(Box::new(VisualizerApp::new(cc, config)))),
    )
}
