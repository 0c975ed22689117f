//! Pull Sheet Viewer - TCGplayer pull sheet export viewer
//!
//! Loads a pull sheet CSV, normalizes card conditions and printings, and
//! shows the products in a condition-styled table.

mod config;
mod data;
mod gui;
mod logging;

use clap::Parser;
use config::Args;
use gui::PullSheetApp;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(&args.log_filter)?;

    let options = args.native_options();
    let initial_file = args.file;

    eframe::run_native(
        "Pull Sheet Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(PullSheetApp::new(cc, initial_file)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run viewer: {}", e))
}
