//! Reverse matching: beverage preference and occasion to an ideal cigar
//!
//! Selection walks three tables top to bottom and the first hit wins:
//! occasion overrides, then the category's preference branches, then the
//! category fallback, then the global default. Relaxing and Evening have no
//! override row, and spirits has no category row, so both reach the default.

use crate::engine::ReverseVariant;
use crate::models::ReversePairing;
use crate::types::{Occasion, PairingCategory};

/// Occasion that short-circuits category and preference
#[derive(Debug, Clone, Copy)]
pub struct OccasionOverride {
    pub occasion: Occasion,
    pub variant: ReverseVariant,
}

/// Preference keywords (any substring) leading to a variant
#[derive(Debug, Clone, Copy)]
pub struct PreferenceBranch {
    pub keywords: &'static [&'static str],
    pub variant: ReverseVariant,
}

/// Branches for one category, checked in order, plus an optional fallback
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: PairingCategory,
    pub branches: &'static [PreferenceBranch],
    pub fallback: Option<ReverseVariant>,
}

pub static OCCASION_OVERRIDES: [OccasionOverride; 2] = [
    OccasionOverride {
        occasion: Occasion::Morning,
        variant: ReverseVariant::Morning,
    },
    OccasionOverride {
        occasion: Occasion::Celebration,
        variant: ReverseVariant::Celebration,
    },
];

pub static CATEGORY_RULES: [CategoryRule; 6] = [
    CategoryRule {
        category: PairingCategory::Wine,
        branches: &[
            PreferenceBranch {
                keywords: &["red", "bold", "cabernet"],
                variant: ReverseVariant::WineBoldRed,
            },
            PreferenceBranch {
                keywords: &["white", "light", "pinot"],
                variant: ReverseVariant::WineLightWhite,
            },
        ],
        fallback: None,
    },
    CategoryRule {
        category: PairingCategory::Whiskey,
        branches: &[
            PreferenceBranch {
                keywords: &["peat", "smoke", "islay"],
                variant: ReverseVariant::WhiskeySmoky,
            },
            PreferenceBranch {
                keywords: &["bourbon", "sweet"],
                variant: ReverseVariant::WhiskeyBourbon,
            },
        ],
        fallback: None,
    },
    CategoryRule {
        category: PairingCategory::Coffee,
        branches: &[PreferenceBranch {
            keywords: &["espresso", "dark"],
            variant: ReverseVariant::CoffeeDarkRoast,
        }],
        fallback: Some(ReverseVariant::CoffeeDefault),
    },
    CategoryRule {
        category: PairingCategory::Rum,
        branches: &[PreferenceBranch {
            keywords: &["dark", "aged"],
            variant: ReverseVariant::RumDarkAged,
        }],
        fallback: Some(ReverseVariant::RumDefault),
    },
    CategoryRule {
        category: PairingCategory::Chocolate,
        branches: &[],
        fallback: Some(ReverseVariant::Chocolate),
    },
    CategoryRule {
        category: PairingCategory::Tea,
        branches: &[],
        fallback: Some(ReverseVariant::Tea),
    },
];

/// Used when no occasion, branch, or category fallback applies
pub const GLOBAL_DEFAULT: ReverseVariant = ReverseVariant::MediumHabano;

/// Walk the decision tables and pick a variant
pub fn select_reverse_variant(
    category: PairingCategory,
    preference: &str,
    occasion: Option<Occasion>,
) -> ReverseVariant {
    if let Some(occasion) = occasion {
        if let Some(rule) = OCCASION_OVERRIDES.iter().find(|rule| rule.occasion == occasion) {
            return rule.variant;
        }
    }

    let preference = preference.to_lowercase();
    let Some(rule) = CATEGORY_RULES.iter().find(|rule| rule.category == category) else {
        return GLOBAL_DEFAULT;
    };

    rule.branches
        .iter()
        .find(|branch| {
            branch
                .keywords
                .iter()
                .any(|keyword| preference.contains(keyword))
        })
        .map(|branch| branch.variant)
        .or(rule.fallback)
        .unwrap_or(GLOBAL_DEFAULT)
}

/// Recommend one ideal cigar for a beverage preference and optional occasion
pub fn get_reverse_pairing(
    category: PairingCategory,
    preference: &str,
    occasion: Option<Occasion>,
) -> ReversePairing {
    let variant = select_reverse_variant(category, preference, occasion);
    tracing::debug!(
        %category,
        preference,
        occasion = occasion.map(|o| o.as_str()),
        ?variant,
        "Selected reverse pairing"
    );
    ReversePairing::from(variant.archetype())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning_overrides_category() {
        assert_eq!(
            select_reverse_variant(PairingCategory::Wine, "white", Some(Occasion::Morning)),
            ReverseVariant::Morning
        );
        let pairing = get_reverse_pairing(PairingCategory::Wine, "white", Some(Occasion::Morning));
        assert_eq!(pairing.title, "Clasico Dominican Lonsdale");
        assert!(pairing.suggested_tags.contains(&"Morning".to_string()));
    }

    #[test]
    fn test_celebration_overrides_category() {
        for category in PairingCategory::ALL {
            assert_eq!(
                select_reverse_variant(category, "anything", Some(Occasion::Celebration)),
                ReverseVariant::Celebration
            );
        }
    }

    #[test]
    fn test_relaxing_and_evening_fall_through() {
        for occasion in [Occasion::Relaxing, Occasion::Evening] {
            assert_eq!(
                select_reverse_variant(PairingCategory::Tea, "", Some(occasion)),
                ReverseVariant::Tea
            );
            assert_eq!(
                select_reverse_variant(PairingCategory::Wine, "Bold Red", Some(occasion)),
                ReverseVariant::WineBoldRed
            );
        }
    }

    #[test]
    fn test_wine_branches() {
        assert_eq!(
            select_reverse_variant(PairingCategory::Wine, "I like bold red wines", None),
            ReverseVariant::WineBoldRed
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Wine, "Crisp White", None),
            ReverseVariant::WineLightWhite
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Wine, "PINOT grigio", None),
            ReverseVariant::WineLightWhite
        );
        // First family to match wins
        assert_eq!(
            select_reverse_variant(PairingCategory::Wine, "light red", None),
            ReverseVariant::WineBoldRed
        );
    }

    #[test]
    fn test_wine_without_match_uses_global_default() {
        let pairing = get_reverse_pairing(PairingCategory::Wine, "unrecognized-gibberish", None);
        assert_eq!(pairing.title, "Medium-Bodied Habano");
        // "Sweet Port" matches neither wine family
        assert_eq!(
            select_reverse_variant(PairingCategory::Wine, "Sweet Port", None),
            GLOBAL_DEFAULT
        );
    }

    #[test]
    fn test_whiskey_branches() {
        assert_eq!(
            select_reverse_variant(PairingCategory::Whiskey, "Peated & Smoky", None),
            ReverseVariant::WhiskeySmoky
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Whiskey, "Sweet Bourbon", None),
            ReverseVariant::WhiskeyBourbon
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Whiskey, "Smooth Speyside", None),
            GLOBAL_DEFAULT
        );
    }

    #[test]
    fn test_coffee_and_rum_fallbacks() {
        assert_eq!(
            select_reverse_variant(PairingCategory::Coffee, "Black Espresso", None),
            ReverseVariant::CoffeeDarkRoast
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Coffee, "Creamy Latte", None),
            ReverseVariant::CoffeeDefault
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Rum, "Dark & Aged", None),
            ReverseVariant::RumDarkAged
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Rum, "Spiced", None),
            ReverseVariant::RumDefault
        );
    }

    #[test]
    fn test_single_variant_categories_ignore_preference() {
        assert_eq!(
            select_reverse_variant(PairingCategory::Chocolate, "Milk Chocolate", None),
            ReverseVariant::Chocolate
        );
        assert_eq!(
            select_reverse_variant(PairingCategory::Tea, "", None),
            ReverseVariant::Tea
        );
    }

    #[test]
    fn test_spirits_has_no_branch() {
        let pairing = get_reverse_pairing(PairingCategory::Spirits, "anything", None);
        assert_eq!(pairing.title, "Medium-Bodied Habano");
        assert_eq!(
            select_reverse_variant(PairingCategory::Spirits, "Cognac", Some(Occasion::Evening)),
            GLOBAL_DEFAULT
        );
    }
}
