//! Condition Classifier
//! Splits a raw TCGplayer condition string into a canonical grade and the
//! printing qualifier that follows it.

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical condition grade of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    NearMint,
    LightlyPlayed,
    ModeratelyPlayed,
    HeavilyPlayed,
    Damaged,
    Unopened,
    #[default]
    Unknown,
}

impl Condition {
    /// Grades recognised by prefix, in match priority order.
    ///
    /// The first label the raw string starts with wins, even if a later
    /// label would give a longer match.
    pub const CANONICAL: [Condition; 6] = [
        Condition::NearMint,
        Condition::LightlyPlayed,
        Condition::ModeratelyPlayed,
        Condition::HeavilyPlayed,
        Condition::Damaged,
        Condition::Unopened,
    ];

    /// Label as it appears in the vendor export.
    pub fn label(self) -> &'static str {
        match self {
            Condition::NearMint => "Near Mint",
            Condition::LightlyPlayed => "Lightly Played",
            Condition::ModeratelyPlayed => "Moderately Played",
            Condition::HeavilyPlayed => "Heavily Played",
            Condition::Damaged => "Damaged",
            Condition::Unopened => "Unopened",
            Condition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify a raw condition string.
///
/// Returns the matched grade and the trimmed remainder (the printing).
/// Matching is a case-sensitive prefix test. Unrecognised input yields
/// `Condition::Unknown` with the whole string, trimmed, as printing.
pub fn classify(raw: &str) -> (Condition, String) {
    Condition::CANONICAL
        .iter()
        .find_map(|&condition| {
            raw.strip_prefix(condition.label())
                .map(|rest| (condition, rest.trim().to_string()))
        })
        .unwrap_or_else(|| (Condition::Unknown, raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_splits_off_its_suffix() {
        for condition in Condition::CANONICAL {
            let raw = format!("{}   Reverse Holofoil  ", condition.label());
            assert_eq!(
                classify(&raw),
                (condition, "Reverse Holofoil".to_string())
            );
        }
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(classify(""), (Condition::Unknown, String::new()));
    }

    #[test]
    fn unrecognised_input_is_kept_as_printing() {
        assert_eq!(
            classify("Gibberish"),
            (Condition::Unknown, "Gibberish".to_string())
        );
        assert_eq!(
            classify("  Played Holofoil "),
            (Condition::Unknown, "Played Holofoil".to_string())
        );
    }

    #[test]
    fn near_mint_printings() {
        assert_eq!(
            classify("Near Mint Holofoil"),
            (Condition::NearMint, "Holofoil".to_string())
        );
        assert_eq!(
            classify("Near Mint 1st Edition Holofoil"),
            (Condition::NearMint, "1st Edition Holofoil".to_string())
        );
    }

    #[test]
    fn bare_label_has_empty_printing() {
        assert_eq!(classify("Damaged"), (Condition::Damaged, String::new()));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert_eq!(
            classify("near mint Foil"),
            (Condition::Unknown, "near mint Foil".to_string())
        );
    }

    #[test]
    fn earlier_label_wins_over_later_one() {
        // Only the leading label counts, later labels stay in the printing
        assert_eq!(
            classify("Near MintDamaged"),
            (Condition::NearMint, "Damaged".to_string())
        );
        assert_eq!(
            classify("Damaged Near Mint"),
            (Condition::Damaged, "Near Mint".to_string())
        );
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Condition::ModeratelyPlayed).unwrap();
        assert_eq!(json, "\"Moderately Played\"");
    }
}
