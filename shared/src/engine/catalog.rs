//! Compile-time reference data: beverage archetypes and ideal-cigar variants

use crate::models::{BeverageArchetype, CigarArchetype, FlavorProfile};
use crate::types::{Dimension, PairingCategory};

/// The five beverage archetypes, in declaration order
pub static BEVERAGE_ARCHETYPES: [BeverageArchetype; 5] = [
    BeverageArchetype {
        category: PairingCategory::Wine,
        title: "Cabernet Sauvignon",
        subtitle: "Bold & Tannic",
        description: "Heavy tannins and dark fruit notes.",
        why_it_works: "The structural tannins act as a palate cleanser for the heavy oils in bold cigars.",
        sommelier_tip: "Let it breathe for 30 minutes to soften the oak before your first puff.",
        highlights: &[(Dimension::Body, 9), (Dimension::Wood, 7), (Dimension::Earth, 6)],
        profile: FlavorProfile::new(4, 3, 7, 2, 7, 9),
    },
    BeverageArchetype {
        category: PairingCategory::Whiskey,
        title: "Peated Islay Malt",
        subtitle: "Smoky & Intense",
        description: "Ocean sea-salt and dense peat smoke.",
        why_it_works: "The medicinal smoke profile provides a \"dense\" atmospheric match for robust tobaccos.",
        sommelier_tip: "Add three drops of spring water to unlock the hidden vanilla notes.",
        highlights: &[(Dimension::Body, 10), (Dimension::Wood, 8), (Dimension::Spice, 7)],
        profile: FlavorProfile::new(8, 2, 6, 1, 9, 10),
    },
    BeverageArchetype {
        category: PairingCategory::Coffee,
        title: "Sumatran Mandheling",
        subtitle: "Earthy & Low Acid",
        description: "Naturally earthy with a heavy, syrupy mouthfeel.",
        why_it_works: "Matches the rich, soil-driven notes of Habano wrappers perfectly.",
        sommelier_tip: "Use a French Press to keep the coffee oils intact for maximum richness.",
        highlights: &[(Dimension::Earth, 9), (Dimension::Body, 7)],
        profile: FlavorProfile::new(3, 3, 9, 3, 4, 7),
    },
    BeverageArchetype {
        category: PairingCategory::Rum,
        title: "Aged Caribbean Dark Rum",
        subtitle: "Caramel & Spice",
        description: "Rich molasses sweetness with a long oak finish.",
        why_it_works: "Provides a sweet bridge that softens the peppery spice of a full-bodied cigar.",
        sommelier_tip: "Sip neat at 20°C to allow the oils to integrate with the smoke.",
        highlights: &[(Dimension::Sweet, 9), (Dimension::Wood, 6)],
        profile: FlavorProfile::new(5, 9, 2, 3, 6, 8),
    },
    BeverageArchetype {
        category: PairingCategory::Chocolate,
        title: "85% Single Origin Cacao",
        subtitle: "Bitter & Pure",
        description: "Dark, savory, and complex without excess sugar.",
        why_it_works: "The pure bitterness highlights the hidden floral notes in aged cigars.",
        sommelier_tip: "Melt a small square on your tongue before your first draw.",
        highlights: &[(Dimension::Body, 8), (Dimension::Earth, 7)],
        profile: FlavorProfile::new(3, 2, 8, 1, 4, 9),
    },
];

/// Read-only view of the beverage catalog
pub fn beverage_archetypes() -> &'static [BeverageArchetype] {
    &BEVERAGE_ARCHETYPES
}

/// Every ideal-cigar recommendation the reverse matcher can return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReverseVariant {
    MediumHabano,
    Morning,
    Celebration,
    WineBoldRed,
    WineLightWhite,
    WhiskeySmoky,
    WhiskeyBourbon,
    CoffeeDarkRoast,
    CoffeeDefault,
    RumDarkAged,
    RumDefault,
    Chocolate,
    Tea,
}

impl ReverseVariant {
    /// Catalog entry for this variant
    pub fn archetype(&self) -> &'static CigarArchetype {
        match self {
            ReverseVariant::MediumHabano => &MEDIUM_HABANO,
            ReverseVariant::Morning => &MORNING,
            ReverseVariant::Celebration => &CELEBRATION,
            ReverseVariant::WineBoldRed => &WINE_BOLD_RED,
            ReverseVariant::WineLightWhite => &WINE_LIGHT_WHITE,
            ReverseVariant::WhiskeySmoky => &WHISKEY_SMOKY,
            ReverseVariant::WhiskeyBourbon => &WHISKEY_BOURBON,
            ReverseVariant::CoffeeDarkRoast => &COFFEE_DARK_ROAST,
            ReverseVariant::CoffeeDefault => &COFFEE_DEFAULT,
            ReverseVariant::RumDarkAged => &RUM_DARK_AGED,
            ReverseVariant::RumDefault => &RUM_DEFAULT,
            ReverseVariant::Chocolate => &CHOCOLATE,
            ReverseVariant::Tea => &TEA,
        }
    }
}

static MEDIUM_HABANO: CigarArchetype = CigarArchetype {
    title: "Medium-Bodied Habano",
    ideal_profile: "A versatile cigar with notes of cedar, leather, and mild pepper.",
    why_it_works: "This balanced profile complements most beverages without stealing the show.",
    sommelier_tip: "Start with a Robusto size for a consistent 45-minute experience.",
    suggested_tags: &["Medium", "Balanced", "Habano"],
    profile: Some(FlavorProfile::new(4, 4, 5, 5, 6, 6)),
};

static MORNING: CigarArchetype = CigarArchetype {
    title: "Clasico Dominican Lonsdale",
    ideal_profile: "Creamy, buttery, and light with notes of cedar and toasted nuts.",
    why_it_works: "Morning palates are fresh and sensitive. This mild start won't fatigue your taste buds.",
    sommelier_tip: "Pairs beautifully with a light roast coffee or a breakfast tea.",
    suggested_tags: &["Mild", "Morning", "Creamy"],
    profile: Some(FlavorProfile::new(2, 4, 2, 8, 4, 3)),
};

static CELEBRATION: CigarArchetype = CigarArchetype {
    title: "Aged Nicaraguan Figurado",
    ideal_profile: "Rare, complex, and transitioning from sweet cocoa to bold black pepper.",
    why_it_works: "Special moments demand a cigar that evolves. This shape offers a dynamic experience.",
    sommelier_tip: "Reserve this for the \"top shelf\" spirits in your collection.",
    suggested_tags: &["Premium", "Celebration", "Limited"],
    profile: Some(FlavorProfile::new(8, 3, 6, 2, 7, 9)),
};

static WINE_BOLD_RED: CigarArchetype = CigarArchetype {
    title: "Full-Bodied Nicaraguan",
    ideal_profile: "Powerful and spicy with earth and dark espresso notes.",
    why_it_works: "The structural tannins in bold reds need a high-nicotine, oily cigar to find equilibrium.",
    sommelier_tip: "Look for a \"San Andres\" or \"Broadleaf\" Maduro wrapper for a natural cocoa sweetness.",
    suggested_tags: &["Nicaraguan", "Full", "Maduro"],
    profile: Some(FlavorProfile::new(7, 3, 8, 1, 5, 9)),
};

static WINE_LIGHT_WHITE: CigarArchetype = CigarArchetype {
    title: "Mild Dominican Connecticut",
    ideal_profile: "Creamy, buttery, and smooth with notes of cashews and vanilla.",
    why_it_works: "Delicate white wines are easily overwhelmed. This mild profile lets the wine's acidity shine.",
    sommelier_tip: "Draw slowly. If the cigar gets too hot, it will turn bitter and clash with the wine.",
    suggested_tags: &["Mild", "Connecticut", "Creamy"],
    profile: Some(FlavorProfile::new(1, 5, 2, 9, 3, 2)),
};

static WHISKEY_SMOKY: CigarArchetype = CigarArchetype {
    title: "Robust Sun-Grown Corojo",
    ideal_profile: "Red pepper spice, strong cedar, and a long, savory finish.",
    why_it_works: "Peated spirits need a partner that can \"shout back\". The Corojo spice cuts through the peat smoke.",
    sommelier_tip: "An aged Partagas or Rocky Patel Sun Grown is a classic Islay companion.",
    suggested_tags: &["Bold", "Corojo", "Spicy"],
    profile: Some(FlavorProfile::new(9, 2, 6, 1, 8, 9)),
};

static WHISKEY_BOURBON: CigarArchetype = CigarArchetype {
    title: "Connecticut Broadleaf (Maduro)",
    ideal_profile: "Rich chocolate, molasses, and a heavy, syrupy smoke profile.",
    why_it_works: "Bourbon has natural corn sweetness and vanilla oak. This wrapper mirrors those sweet, dark notes.",
    sommelier_tip: "Try a Padron 1926 or My Father Le Bijou for the ultimate Bourbon pairing.",
    suggested_tags: &["Premium", "Maduro", "Sweet"],
    profile: Some(FlavorProfile::new(4, 9, 5, 3, 4, 8)),
};

static COFFEE_DARK_ROAST: CigarArchetype = CigarArchetype {
    title: "Mexican San Andres Oscuro",
    ideal_profile: "Deep cocoa, roasted grain, and a thick, velvety smoke.",
    why_it_works: "Oscuro (black) wrappers are thick and oily, holding their own against concentrated espresso.",
    sommelier_tip: "The \"Petit Corona\" is a perfect size for an intense morning ritual.",
    suggested_tags: &["Very Bold", "Dark", "Mexican"],
    profile: Some(FlavorProfile::new(5, 6, 9, 1, 4, 10)),
};

static COFFEE_DEFAULT: CigarArchetype = CigarArchetype {
    title: "Clasico Dominican Lonsdale",
    ideal_profile: "Cedar, hay, and a very clean, nutty finish.",
    why_it_works: "Dominican tobacco is the smoothest on earth, blending seamlessly with the dairy in coffee.",
    sommelier_tip: "Look for a wrapper with a golden-yellow hue; this indicates a light, creamy smoke.",
    suggested_tags: &["Dominican", "Mild", "Nutty"],
    profile: Some(FlavorProfile::new(1, 4, 2, 10, 3, 2)),
};

static RUM_DARK_AGED: CigarArchetype = CigarArchetype {
    title: "Costa Rican Maduro",
    ideal_profile: "Rich, sweet, and heavy with notes of molasses and toasted oak.",
    why_it_works: "Aged rums are effectively liquid molasses. A Costa Rican Maduro provides the required weight and sugar.",
    sommelier_tip: "Try a Rocky Patel Fifty-Five for a decadent experience.",
    suggested_tags: &["Full", "Maduro", "Sweet"],
    profile: Some(FlavorProfile::new(3, 10, 4, 2, 6, 9)),
};

static RUM_DEFAULT: CigarArchetype = CigarArchetype {
    title: "Honduran Corojo",
    ideal_profile: "Medium-bodied with a classic \"dirty\" earthiness and spice.",
    why_it_works: "Spiced rums need a cigar with its own spice rack. The Corojo seed is the perfect match.",
    sommelier_tip: "The CLE Corojo is a fantastic choice for any spiced rum.",
    suggested_tags: &["Medium", "Corojo", "Spicy"],
    profile: Some(FlavorProfile::new(6, 4, 7, 1, 5, 6)),
};

static CHOCOLATE: CigarArchetype = CigarArchetype {
    title: "Nicaraguan Broadleaf",
    ideal_profile: "Dark chocolate, coffee bean, and a slightly salty finish.",
    why_it_works: "Dark chocolate needs a cigar that can match its intensity without being bitter.",
    sommelier_tip: "Eat a small piece of chocolate, then take a puff to see how the flavors meld.",
    suggested_tags: &["Full", "Maduro", "Complex"],
    profile: Some(FlavorProfile::new(5, 4, 6, 2, 3, 9)),
};

static TEA: CigarArchetype = CigarArchetype {
    title: "Mild Dominican Lonsdale",
    ideal_profile: "Floral, herbal, and light with a clean cedar finish.",
    why_it_works: "Tea is subtle. A heavy cigar would be like putting hot sauce on a salad. Balance is key.",
    sommelier_tip: "Green tea pairs excellently with a very light Connecticut shade wrapper.",
    suggested_tags: &["Mild", "Floral", "Dominican"],
    profile: Some(FlavorProfile::new(1, 3, 2, 7, 5, 2)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beverage_profiles_within_scale() {
        for archetype in beverage_archetypes() {
            assert!(archetype.profile.is_within_scale(), "{}", archetype.title);
            assert!(!archetype.profile_match().is_empty(), "{}", archetype.title);
        }
    }

    #[test]
    fn test_beverage_catalog_order() {
        let categories: Vec<_> = beverage_archetypes().iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![
                PairingCategory::Wine,
                PairingCategory::Whiskey,
                PairingCategory::Coffee,
                PairingCategory::Rum,
                PairingCategory::Chocolate,
            ]
        );
    }

    #[test]
    fn test_cigar_variants_have_profiles() {
        let variants = [
            ReverseVariant::MediumHabano,
            ReverseVariant::Morning,
            ReverseVariant::Celebration,
            ReverseVariant::WineBoldRed,
            ReverseVariant::WineLightWhite,
            ReverseVariant::WhiskeySmoky,
            ReverseVariant::WhiskeyBourbon,
            ReverseVariant::CoffeeDarkRoast,
            ReverseVariant::CoffeeDefault,
            ReverseVariant::RumDarkAged,
            ReverseVariant::RumDefault,
            ReverseVariant::Chocolate,
            ReverseVariant::Tea,
        ];
        for variant in variants {
            let archetype = variant.archetype();
            let profile = archetype.profile.expect("every variant carries a profile");
            assert!(profile.is_within_scale(), "{}", archetype.title);
            assert_eq!(archetype.suggested_tags.len(), 3, "{}", archetype.title);
        }
    }
}
