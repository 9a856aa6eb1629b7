//! Choices offered by the guided "start from a drink" flow

use crate::models::{DrinkOption, OccasionOption};
use crate::types::{Occasion, PairingCategory};

struct DrinkPreset {
    category: PairingCategory,
    label: &'static str,
    preferences: [&'static str; 3],
}

static DRINK_PRESETS: [DrinkPreset; 7] = [
    DrinkPreset {
        category: PairingCategory::Whiskey,
        label: "Whiskey",
        preferences: ["Peated & Smoky", "Sweet Bourbon", "Smooth Speyside"],
    },
    DrinkPreset {
        category: PairingCategory::Wine,
        label: "Wine",
        preferences: ["Bold Red", "Crisp White", "Sweet Port"],
    },
    DrinkPreset {
        category: PairingCategory::Coffee,
        label: "Coffee",
        preferences: ["Black Espresso", "Creamy Latte", "Medium Roast"],
    },
    DrinkPreset {
        category: PairingCategory::Rum,
        label: "Rum",
        preferences: ["Dark & Aged", "Spiced", "Rhum Agricole"],
    },
    DrinkPreset {
        category: PairingCategory::Tea,
        label: "Tea",
        preferences: ["Black Tea", "Green Tea", "Herbal"],
    },
    DrinkPreset {
        category: PairingCategory::Spirits,
        label: "Spirits",
        preferences: ["Gin/Tequila", "Brandy", "Cognac"],
    },
    DrinkPreset {
        category: PairingCategory::Chocolate,
        label: "Chocolate",
        preferences: ["Extra Dark 85%", "Sea Salt", "Milk Chocolate"],
    },
];

/// Drinks and their preference presets, in display order
pub fn drink_menu() -> Vec<DrinkOption> {
    DRINK_PRESETS
        .iter()
        .map(|preset| DrinkOption {
            category: preset.category,
            label: preset.label.to_string(),
            icon: preset.category.icon().to_string(),
            preferences: preset.preferences.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

/// Order in which the guided flow lists occasions
static OCCASION_DISPLAY_ORDER: [Occasion; 4] = [
    Occasion::Morning,
    Occasion::Relaxing,
    Occasion::Evening,
    Occasion::Celebration,
];

/// The four occasions with their display copy
pub fn occasion_options() -> Vec<OccasionOption> {
    OCCASION_DISPLAY_ORDER
        .iter()
        .copied()
        .map(OccasionOption::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{select_reverse_variant, ReverseVariant, GLOBAL_DEFAULT};

    #[test]
    fn test_menu_covers_every_category_once() {
        let menu = drink_menu();
        assert_eq!(menu.len(), PairingCategory::ALL.len());
        for category in PairingCategory::ALL {
            assert_eq!(menu.iter().filter(|d| d.category == category).count(), 1);
        }
    }

    #[test]
    fn test_presets_resolve_through_reverse_matcher() {
        let menu = drink_menu();
        let wine = menu.iter().find(|d| d.category == PairingCategory::Wine).unwrap();
        let variants: Vec<ReverseVariant> = wine
            .preferences
            .iter()
            .map(|p| select_reverse_variant(wine.category, p, None))
            .collect();
        assert_eq!(
            variants,
            vec![
                ReverseVariant::WineBoldRed,
                ReverseVariant::WineLightWhite,
                GLOBAL_DEFAULT,
            ]
        );
    }

    #[test]
    fn test_occasion_options_order() {
        let options = occasion_options();
        let order: Vec<Occasion> = options.iter().map(|o| o.occasion).collect();
        assert_eq!(
            order,
            vec![
                Occasion::Morning,
                Occasion::Relaxing,
                Occasion::Evening,
                Occasion::Celebration,
            ]
        );
        let titles: Vec<&str> = options.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Morning Ritual",
                "Afternoon/Relaxing",
                "Evening Reflection",
                "Special Celebration",
            ]
        );
    }

    #[test]
    fn test_celebration_copy() {
        let options = occasion_options();
        let celebration = options
            .iter()
            .find(|o| o.occasion == Occasion::Celebration)
            .unwrap();
        assert_eq!(celebration.title, "Special Celebration");
        assert_eq!(
            celebration.description,
            "The best of the best. Time for the top shelf."
        );
    }
}
