//! JSON Export Module
//! Writes the normalized products of a pull sheet to disk.

use super::loader::PullSheet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize products: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the sheet's products as a pretty-printed JSON array.
pub fn write_json(sheet: &PullSheet, output_path: &Path) -> Result<(), ExportError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &sheet.products)?;
    writer.flush()?;

    info!(path = %output_path.display(), products = sheet.len(), "Exported pull sheet");
    Ok(())
}
