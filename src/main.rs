//! SigPlot - Bar Chart Builder
//!
//! A Rust application for building bar charts with error bars and
//! significance brackets, with live preview and PNG export.

mod chart;
mod gui;

use eframe::egui;
use gui::SigPlotApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("SigPlot"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SigPlot",
        options,
        Box::new(|cc| Ok(Box::new(SigPlotApp::new(cc)))),
    )
}
