//! Toolbar Widget
//! Top bar with the upload and export buttons and the load status.

use egui::{Color32, RichText};
use std::path::PathBuf;

/// Top toolbar state.
pub struct Toolbar {
    pub csv_path: Option<PathBuf>,
    pub status: String,
    pub is_loading: bool,
    pub export_enabled: bool,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            csv_path: None,
            status: "Ready".to_string(),
            is_loading: false,
            export_enabled: false,
        }
    }
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the toolbar
    pub fn show(&mut self, ui: &mut egui::Ui) -> ToolbarAction {
        let mut action = ToolbarAction::None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("TCGplayer Pull Sheet Tool")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );

            ui.add_space(15.0);

            let file_name = self
                .csv_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "No file selected".to_string());
            ui.label(RichText::new(file_name).size(12.0).color(Color32::GRAY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(self.export_enabled && !self.is_loading, |ui| {
                    if ui.button("💾 Export JSON").clicked() {
                        action = ToolbarAction::ExportJson;
                    }
                });

                ui.add_enabled_ui(!self.is_loading, |ui| {
                    let upload = egui::Button::new(RichText::new("📂 Upload Pull Sheet Export").strong());
                    if ui.add(upload).clicked() {
                        action = ToolbarAction::UploadCsv;
                    }
                });

                if self.is_loading {
                    ui.spinner();
                }

                let status_color = if self.status.starts_with("Error") {
                    Color32::from_rgb(220, 53, 69)
                } else if self.status.starts_with("Loaded") {
                    Color32::from_rgb(40, 167, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&self.status).size(11.0).color(status_color));
            });
        });

        action
    }
}

/// Actions triggered by the toolbar
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    None,
    UploadCsv,
    ExportJson,
}
