//! Product Table Widget
//! Central scrollable table listing the products of the loaded pull sheet,
//! one row per product in file order.

use crate::data::PullSheet;
use crate::gui::cell_style::CellStyle;
use egui::{Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};
use tracing::error;

const ROW_HEIGHT: f32 = 22.0;
const HEADER_HEIGHT: f32 = 24.0;

const HEADERS: [&str; 8] = [
    "Product Line",
    "Set",
    "Quantity",
    "Product Name",
    "Condition",
    "Printing",
    "Main Photo URL",
    "Set Release Date",
];

/// Right-aligned columns (Set, Quantity).
const RIGHT_ALIGNED: [usize; 2] = [1, 2];

/// Table of normalized products.
#[derive(Default)]
pub struct ProductTable {
    /// Row to bring into view on the next frame (reset after a new upload).
    scroll_to_row: Option<usize>,
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top, used after a new sheet is loaded.
    pub fn reset_scroll(&mut self) {
        self.scroll_to_row = Some(0);
    }

    /// Draw the table for `sheet`, or a placeholder if nothing is loaded.
    pub fn show(&mut self, ui: &mut egui::Ui, sheet: Option<&PullSheet>) {
        let Some(sheet) = sheet.filter(|s| !s.is_empty()) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No pull sheet loaded").size(20.0));
            });
            return;
        };

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .min_scrolled_height(0.0);

        for (idx, _) in HEADERS.iter().enumerate() {
            let column = match idx {
                3 => Column::initial(360.0).at_least(120.0),
                6 => Column::initial(220.0).at_least(80.0),
                _ => Column::auto().at_least(60.0),
            };
            table = table.column(column.clip(true));
        }

        if let Some(row) = self.scroll_to_row.take() {
            table = table.scroll_to_row(row, Some(Align::TOP));
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                for (idx, title) in HEADERS.iter().enumerate() {
                    header.col(|ui| {
                        if RIGHT_ALIGNED.contains(&idx) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.strong(*title);
                            });
                        } else {
                            ui.strong(*title);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, sheet.len(), |mut row| {
                    let product = &sheet.products[row.index()];
                    let style = CellStyle::for_condition(&product.condition);

                    row.col(|ui| {
                        ui.label(style.apply(&product.product_line));
                    });
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(style.apply(&product.set));
                        });
                    });
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(style.apply(product.quantity.to_string()));
                        });
                    });
                    row.col(|ui| {
                        ui.label(style.apply(&product.display_name))
                            .on_hover_text(product.condition.as_str());
                    });
                    row.col(|ui| {
                        ui.label(style.apply(product.display_condition.label()));
                    });
                    row.col(|ui| {
                        ui.label(style.apply(&product.printing));
                    });
                    row.col(|ui| {
                        let url = &product.main_photo_url;
                        if !url.is_empty() && ui.link(style.apply(url)).clicked() {
                            if let Err(e) = open::that(url) {
                                error!(url = %url, error = %e, "Failed to open photo URL");
                            }
                        }
                    });
                    row.col(|ui| {
                        ui.label(style.apply(&product.set_release_date));
                    });
                });
            });
    }
}
