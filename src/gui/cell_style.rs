//! Condition-driven cell styling for the product table.

use egui::{Color32, RichText};

const PRIMARY: Color32 = Color32::from_rgb(25, 118, 210);
const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);
const WARNING: Color32 = Color32::from_rgb(237, 108, 2);
const ERROR: Color32 = Color32::from_rgb(211, 47, 47);
const INFO: Color32 = Color32::from_rgb(2, 136, 209);

const BASE_WEIGHT: i32 = 200;
const STRONG_WEIGHT: i32 = 400;

/// Text style applied to every cell of a product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    /// `None` keeps the theme's text colour.
    pub color: Option<Color32>,
    pub weight: i32,
    pub italic: bool,
}

impl CellStyle {
    /// Derive the style from the raw condition string of a product.
    pub fn for_condition(condition: &str) -> Self {
        let mut weight = BASE_WEIGHT;
        if condition.contains("Holo") || condition.contains("Foil") {
            weight += 200;
        }
        if condition.contains("1st Edition") {
            weight += 200;
        }
        let reverse_holo = condition.contains("Reverse Holofoil");
        if reverse_holo {
            weight -= 200;
        }

        let color = if condition.starts_with("Near Mint") {
            None
        } else if condition.starts_with("Lightly Played") {
            Some(PRIMARY)
        } else if condition.starts_with("Moderately Played") {
            Some(SUCCESS)
        } else if condition.starts_with("Heavily Played") {
            Some(WARNING)
        } else if condition.starts_with("Damaged") {
            Some(ERROR)
        } else if condition.starts_with("Unopened") {
            Some(INFO)
        } else {
            None
        };

        Self {
            color,
            weight,
            italic: reverse_holo,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.weight >= STRONG_WEIGHT
    }

    pub fn apply(&self, text: impl Into<String>) -> RichText {
        let mut rich = RichText::new(text.into());
        if let Some(color) = self.color {
            rich = rich.color(color);
        }
        if self.is_strong() {
            rich = rich.strong();
        }
        if self.italic {
            rich = rich.italics();
        }
        rich
    }
}
