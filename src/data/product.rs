//! Product Module
//! Raw pull sheet rows and their normalized, display-ready form.

use super::condition::{classify, Condition};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One data row of a pull sheet export, keyed by the vendor's column names.
///
/// Columns missing from the file come through as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRow {
    #[serde(rename = "Product Line")]
    pub product_line: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Set")]
    pub set: String,
    #[serde(rename = "Rarity")]
    pub rarity: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Main Photo URL")]
    pub main_photo_url: String,
    #[serde(rename = "Set Release Date")]
    pub set_release_date: String,
}

/// Parsed quantity. Unparseable input is kept as `NotANumber` and shown as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantity {
    Count(i64),
    #[default]
    NotANumber,
}

impl Quantity {
    /// Parse with base-10 integer-prefix rules: optional leading whitespace,
    /// an optional sign, then as many digits as are present. Trailing text is
    /// ignored. No digits, or a value out of range, gives `NotANumber`.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits_len = unsigned
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Quantity::NotANumber;
        }

        let digits = &unsigned[..digits_len];
        let parsed = if negative {
            format!("-{digits}").parse::<i64>()
        } else {
            digits.parse::<i64>()
        };
        parsed.map(Quantity::Count).unwrap_or(Quantity::NotANumber)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Count(n) => serializer.serialize_i64(*n),
            Quantity::NotANumber => serializer.serialize_none(),
        }
    }
}

/// A normalized pull sheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_line: String,
    pub product_name: String,
    pub display_name: String,
    /// Condition string exactly as exported.
    pub condition: String,
    pub display_condition: Condition,
    pub printing: String,
    pub number: String,
    pub set: String,
    pub rarity: String,
    pub quantity: Quantity,
    pub main_photo_url: String,
    pub set_release_date: String,
}

impl Product {
    /// Normalize one raw row. Never fails.
    pub fn from_raw(raw: &RawRow) -> Self {
        let (display_condition, printing) = classify(&raw.condition);
        let display_name =
            build_display_name(&raw.product_name, &raw.number, &printing, &raw.rarity);

        Self {
            product_line: raw.product_line.clone(),
            product_name: raw.product_name.clone(),
            display_name,
            condition: raw.condition.clone(),
            display_condition,
            printing,
            number: raw.number.clone(),
            set: raw.set.clone(),
            rarity: raw.rarity.clone(),
            quantity: Quantity::parse(&raw.quantity),
            main_photo_url: raw.main_photo_url.clone(),
            set_release_date: raw.set_release_date.clone(),
        }
    }
}

impl From<&Product> for RawRow {
    fn from(product: &Product) -> Self {
        Self {
            product_line: product.product_line.clone(),
            product_name: product.product_name.clone(),
            condition: product.condition.clone(),
            number: product.number.clone(),
            set: product.set.clone(),
            rarity: product.rarity.clone(),
            quantity: match product.quantity {
                Quantity::Count(n) => n.to_string(),
                Quantity::NotANumber => String::new(),
            },
            main_photo_url: product.main_photo_url.clone(),
            set_release_date: product.set_release_date.clone(),
        }
    }
}

/// Build the label shown in the product column.
///
/// The card number is left out when the product name already contains it
/// (set-number suffixes such as `"Charizard (4)"`).
pub fn build_display_name(product_name: &str, number: &str, printing: &str, rarity: &str) -> String {
    if product_name.contains(number) {
        format!("{product_name} - {rarity} {printing}")
    } else {
        format!("{product_name} - {number} - {rarity} {printing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row() -> RawRow {
        RawRow {
            product_line: "Pokemon".to_string(),
            product_name: "Charizard".to_string(),
            condition: "Near Mint 1st Edition Holofoil".to_string(),
            number: "4/102".to_string(),
            set: "Base Set".to_string(),
            rarity: "Holo Rare".to_string(),
            quantity: "2".to_string(),
            main_photo_url: "https://example.com/charizard.jpg".to_string(),
            set_release_date: "01/09/1999".to_string(),
        }
    }

    #[test]
    fn display_name_omits_contained_number() {
        assert_eq!(
            build_display_name("Charizard (4)", "4", "Holofoil", "Rare"),
            "Charizard (4) - Rare Holofoil"
        );
    }

    #[test]
    fn display_name_includes_missing_number() {
        assert_eq!(
            build_display_name("Charizard", "4/102", "Holofoil", "Rare"),
            "Charizard - 4/102 - Rare Holofoil"
        );
    }

    #[test]
    fn display_name_keeps_trailing_space_for_empty_printing() {
        assert_eq!(build_display_name("Pikachu", "58", "", "Common"), "Pikachu - 58 - Common ");
    }

    #[test]
    fn display_name_number_mid_string_counts_as_contained() {
        assert_eq!(
            build_display_name("Team Rocket 12 Booster", "12", "", "Sealed"),
            "Team Rocket 12 Booster - Sealed "
        );
    }

    #[test]
    fn quantity_parses_integer_prefix() {
        assert_eq!(Quantity::parse("12"), Quantity::Count(12));
        assert_eq!(Quantity::parse("  7"), Quantity::Count(7));
        assert_eq!(Quantity::parse("3 copies"), Quantity::Count(3));
        assert_eq!(Quantity::parse("-1"), Quantity::Count(-1));
        assert_eq!(Quantity::parse("+5"), Quantity::Count(5));
    }

    #[test]
    fn quantity_without_digits_is_nan() {
        assert_eq!(Quantity::parse(""), Quantity::NotANumber);
        assert_eq!(Quantity::parse("abc"), Quantity::NotANumber);
        assert_eq!(Quantity::parse("-"), Quantity::NotANumber);
        assert_eq!(Quantity::parse("99999999999999999999"), Quantity::NotANumber);
        assert_eq!(Quantity::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn normalizes_a_full_row() {
        let product = Product::from_raw(&raw_row());

        assert_eq!(product.display_condition, Condition::NearMint);
        assert_eq!(product.printing, "1st Edition Holofoil");
        assert_eq!(product.condition, "Near Mint 1st Edition Holofoil");
        assert_eq!(product.quantity, Quantity::Count(2));
        assert_eq!(
            product.display_name,
            "Charizard - 4/102 - Holo Rare 1st Edition Holofoil"
        );
        assert_eq!(product.main_photo_url, "https://example.com/charizard.jpg");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let product = Product::from_raw(&RawRow::default());

        assert_eq!(product.display_condition, Condition::Unknown);
        assert_eq!(product.printing, "");
        assert_eq!(product.quantity, Quantity::NotANumber);
        assert_eq!(product.display_name, " -  ");
    }

    #[test]
    fn renormalizing_is_idempotent() {
        let mut row = raw_row();
        let first = Product::from_raw(&row);
        assert_eq!(Product::from_raw(&RawRow::from(&first)), first);

        row.quantity = "abc".to_string();
        row.condition = "Mystery".to_string();
        let nan = Product::from_raw(&row);
        assert_eq!(Product::from_raw(&RawRow::from(&nan)), nan);
    }

    #[test]
    fn serializes_camel_case_with_null_nan() {
        let mut row = raw_row();
        row.quantity = String::new();
        let value = serde_json::to_value(Product::from_raw(&row)).unwrap();

        assert_eq!(value["displayCondition"], "Near Mint");
        assert_eq!(value["mainPhotoUrl"], "https://example.com/charizard.jpg");
        assert!(value["quantity"].is_null());
    }
}
