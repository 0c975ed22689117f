//! Launch configuration from the command line.

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pullsheet_viewer", version, about = "TCGplayer pull sheet viewer")]
pub struct Args {
    /// Pull sheet export to open at start-up
    pub file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Initial window width
    #[arg(long, default_value_t = 1400.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

impl Args {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_min_inner_size([900.0, 500.0])
                .with_title("TCGplayer Pull Sheet Tool"),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["pullsheet_viewer"]).unwrap();
        assert!(args.file.is_none());
        assert_eq!(args.log_filter, "info");
        assert_eq!(args.width, 1400.0);
        assert_eq!(args.height, 800.0);
    }

    #[test]
    fn parses_file_and_overrides() {
        let args = Args::try_parse_from([
            "pullsheet_viewer",
            "--log-filter",
            "pullsheet_viewer=debug",
            "--width",
            "1024",
            "exports/pull_sheet.csv",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("exports/pull_sheet.csv")));
        assert_eq!(args.log_filter, "pullsheet_viewer=debug");
        assert_eq!(args.width, 1024.0);
    }
}
