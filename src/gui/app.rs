//! Pull Sheet Viewer Main Application
//! Main window with the upload toolbar and the product table.

use crate::data::{export, PullSheet, PullSheetLoader, Schema};
use crate::gui::{ProductTable, Toolbar, ToolbarAction};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info};

/// CSV loading result from background thread
enum LoadResult {
    Complete(PullSheet),
    Error(String),
}

/// Main application window.
pub struct PullSheetApp {
    sheet: Option<PullSheet>,
    toolbar: Toolbar,
    product_table: ProductTable,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
}

impl PullSheetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            sheet: None,
            toolbar: Toolbar::new(),
            product_table: ProductTable::new(),
            load_rx: None,
        };
        if let Some(path) = initial_file {
            app.start_loading(path);
        }
        app
    }

    /// Ask for a pull sheet export and load it.
    fn handle_upload_csv(&mut self) {
        if self.load_rx.is_some() {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Load in a background thread. The current sheet stays visible until
    /// the new one is complete.
    fn start_loading(&mut self, path: PathBuf) {
        info!(path = %path.display(), "Loading pull sheet");
        self.toolbar.csv_path = Some(path.clone());
        self.toolbar.set_status("Loading pull sheet...");
        self.toolbar.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match PullSheetLoader::load_path(&path) {
                Ok(sheet) => LoadResult::Complete(sheet),
                Err(e) => {
                    error!(error = %e, "Pull sheet load failed");
                    LoadResult::Error(e.to_string())
                }
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(sheet)) => {
                self.toolbar.set_status(&Self::summary(&sheet));
                self.toolbar.export_enabled = !sheet.is_empty();
                self.toolbar.is_loading = false;
                self.product_table.reset_scroll();
                self.sheet = Some(sheet);
            }
            Ok(LoadResult::Error(error)) => {
                self.toolbar.set_status(&format!("Error: {}", error));
                self.toolbar.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                // Put receiver back, still loading
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.toolbar.set_status("Error: loader stopped unexpectedly");
                self.toolbar.is_loading = false;
            }
        }
    }

    fn summary(sheet: &PullSheet) -> String {
        let mut status = format!("Loaded {} products", sheet.len());
        if sheet.schema == Schema::LegacyPhotoUrl {
            status.push_str(" (legacy Photo URL export)");
        }
        if sheet.footer_found {
            status.push_str(", order summary ignored");
        }
        if sheet.skipped_rows > 0 {
            status.push_str(&format!(", {} unreadable rows skipped", sheet.skipped_rows));
        }
        status
    }

    /// Save the loaded products as JSON
    fn handle_export_json(&mut self) {
        let Some(sheet) = &self.sheet else {
            self.toolbar.set_status("No products to export");
            return;
        };

        let default_name = sheet
            .source
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| format!("{}.json", s.to_string_lossy()))
            .unwrap_or_else(|| "pull_sheet.json".to_string());

        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(default_name)
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match export::write_json(sheet, &output_path) {
            Ok(()) => {
                self.toolbar.set_status(&format!(
                    "Exported {} products to {}",
                    sheet.len(),
                    output_path.display()
                ));
            }
            Err(e) => {
                error!(error = %e, "JSON export failed");
                self.toolbar.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for PullSheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.toolbar.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            match self.toolbar.show(ui) {
                ToolbarAction::UploadCsv => self.handle_upload_csv(),
                ToolbarAction::ExportJson => self.handle_export_json(),
                ToolbarAction::None => {}
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.product_table.show(ui, self.sheet.as_ref());
        });
    }
}
