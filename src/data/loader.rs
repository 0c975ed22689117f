//! Pull Sheet Loader Module
//! Reads a TCGplayer pull sheet export with the `csv` crate and turns every
//! product row into a normalized `Product`.

use super::product::{Product, RawRow};
use csv::{ReaderBuilder, StringRecord};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// `Product Line` value of the row that opens the order summary block.
pub const FOOTER_SENTINEL: &str = "Orders Contained in Pull Sheet:";

const MAIN_PHOTO_COLUMN: &str = "Main Photo URL";
const LEGACY_PHOTO_COLUMN: &str = "Photo URL";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV: {0}")]
    CsvError(#[from] csv::Error),
}

/// Header layout of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Photo column named `Main Photo URL`.
    Current,
    /// Older exports name the photo column `Photo URL`.
    LegacyPhotoUrl,
}

impl Schema {
    pub fn detect(headers: &StringRecord) -> Self {
        let has = |name: &str| headers.iter().any(|h| h == name);
        if !has(MAIN_PHOTO_COLUMN) && has(LEGACY_PHOTO_COLUMN) {
            Schema::LegacyPhotoUrl
        } else {
            Schema::Current
        }
    }

    /// Rewrite headers into the current layout.
    pub fn adapt_headers(self, headers: &StringRecord) -> StringRecord {
        match self {
            Schema::Current => headers.clone(),
            Schema::LegacyPhotoUrl => headers
                .iter()
                .map(|h| if h == LEGACY_PHOTO_COLUMN { MAIN_PHOTO_COLUMN } else { h })
                .collect(),
        }
    }
}

/// Result of loading one export.
#[derive(Debug, Clone)]
pub struct PullSheet {
    /// Products in file order.
    pub products: Vec<Product>,
    pub schema: Schema,
    pub footer_found: bool,
    /// Rows that could not be decoded and were left out.
    pub skipped_rows: usize,
    pub source: Option<PathBuf>,
}

impl PullSheet {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Loads pull sheet exports.
pub struct PullSheetLoader;

impl PullSheetLoader {
    /// Load a pull sheet from disk.
    pub fn load_path(path: &Path) -> Result<PullSheet, LoaderError> {
        let file = File::open(path).map_err(|source| LoaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut sheet = Self::load_reader(file)?;
        sheet.source = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Load a pull sheet from any byte source.
    ///
    /// Rows are taken in order until the footer sentinel; the sentinel and
    /// everything after it is dropped. A row that cannot be decoded is
    /// skipped without stopping the load.
    pub fn load_reader<R: Read>(reader: R) -> Result<PullSheet, LoaderError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let raw_headers = reader.headers()?.clone();
        let schema = Schema::detect(&raw_headers);
        match schema {
            Schema::LegacyPhotoUrl => {
                info!("Legacy export detected, mapping '{LEGACY_PHOTO_COLUMN}' to '{MAIN_PHOTO_COLUMN}'")
            }
            Schema::Current if !raw_headers.iter().any(|h| h == MAIN_PHOTO_COLUMN) => {
                warn!("No photo column in export, photo URLs will be empty")
            }
            Schema::Current => {}
        }
        let headers = schema.adapt_headers(&raw_headers);

        let mut rows: Vec<RawRow> = Vec::new();
        let mut skipped_rows = 0;
        let mut footer_found = false;

        for (index, result) in reader.records().enumerate() {
            let line = index + 2;
            let mut record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(line, error = %e, "Skipping undecodable row");
                    skipped_rows += 1;
                    continue;
                }
            };

            // Short rows would otherwise fail with UnexpectedEndOfRow
            while record.len() < headers.len() {
                record.push_field("");
            }

            let row: RawRow = match record.deserialize(Some(&headers)) {
                Ok(row) => row,
                Err(e) => {
                    warn!(line, error = %e, "Skipping malformed row");
                    skipped_rows += 1;
                    continue;
                }
            };

            if row.product_line == FOOTER_SENTINEL {
                debug!(line, "Footer sentinel reached, ignoring order summary");
                footer_found = true;
                break;
            }
            rows.push(row);
        }

        // `collect` on an indexed parallel iterator keeps input order
        let products: Vec<Product> = rows.par_iter().map(Product::from_raw).collect();

        info!(
            products = products.len(),
            skipped_rows, footer_found, "Pull sheet loaded"
        );

        Ok(PullSheet {
            products,
            schema,
            footer_found,
            skipped_rows,
            source: None,
        })
    }
}
