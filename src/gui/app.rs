//! SigPlot Main Application
//! Main window with control panel and chart preview.

use crate::chart::{self, ChartParams, ChartRenderer};
use crate::gui::{ChartPreview, ControlPanel, ControlPanelAction};
use anyhow::Context as _;
use egui::SidePanel;
use std::path::{Path, PathBuf};

/// Main application window.
pub struct SigPlotApp {
    control_panel: ControlPanel,
    last_export: Option<PathBuf>,
}

impl SigPlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            control_panel: ControlPanel::new(),
            last_export: None,
        }
    }

    /// Handle PNG export: render the current parameters, encode, and write
    /// to the location the user picks. Runs inline; a single chart render
    /// is immediate.
    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(chart::EXPORT_FILE_NAME)
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::export_to(&self.control_panel.params, &path) {
            Ok(size) => {
                log::info!(
                    "exported {} ({}, {} bytes)",
                    path.display(),
                    chart::EXPORT_MIME_TYPE,
                    size
                );
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.control_panel
                    .set_status(&format!("Exported {} ({} bytes)", name, size));
                self.last_export = Some(path);
            }
            Err(err) => {
                log::error!("export failed: {err:#}");
                self.control_panel.set_status(&format!("Error: {err:#}"));
            }
        }
    }

    fn export_to(params: &ChartParams, path: &Path) -> anyhow::Result<usize> {
        let (rgb, width, height) =
            ChartRenderer::render_rgb(params).context("chart rendering failed")?;
        let png = chart::encode_png(rgb, width, height).context("PNG encoding failed")?;
        std::fs::write(path, &png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(png.len())
    }

    /// Open the last exported image with the system viewer.
    fn handle_open_export(&mut self) {
        let Some(path) = &self.last_export else {
            return;
        };
        if let Err(err) = open::that(path) {
            log::error!("failed to open {}: {err}", path.display());
            self.control_panel
                .set_status(&format!("Error: could not open {}", path.display()));
        }
    }
}

impl eframe::App for SigPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, self.last_export.is_some());

                    match action {
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::OpenExport => self.handle_open_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Preview
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPreview::show(ui, &self.control_panel.params);
        });
    }
}
