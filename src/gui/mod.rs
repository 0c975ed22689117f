//! GUI module - User interface components

mod app;
mod cell_style;
mod product_table;
mod toolbar;

pub use app::PullSheetApp;
pub use product_table::ProductTable;
pub use toolbar::{Toolbar, ToolbarAction};
