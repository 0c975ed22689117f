//! Data module - pull sheet loading, normalization and export

mod condition;
pub mod export;
mod loader;
mod product;

pub use loader::{PullSheet, PullSheetLoader, Schema};
