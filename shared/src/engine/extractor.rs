//! Flavor profile extraction from declared strength and tasting notes

use crate::models::FlavorProfile;
use crate::types::Dimension;

/// Starting value for every notes-driven dimension
pub const BASELINE_LEVEL: u32 = 2;

/// Body values by declared strength
pub const FULL_BODY: u32 = 9;
pub const MEDIUM_BODY: u32 = 5;
pub const MILD_BODY: u32 = 3;

/// A family of note keywords that bumps one dimension when any member appears
#[derive(Debug, Clone, Copy)]
pub struct KeywordFamily {
    pub dimension: Dimension,
    pub keywords: &'static [&'static str],
    pub delta: u32,
}

/// Families are independent: every matching family adds its delta
pub static NOTE_KEYWORD_FAMILIES: [KeywordFamily; 9] = [
    KeywordFamily {
        dimension: Dimension::Spice,
        keywords: &["pepper", "spice"],
        delta: 5,
    },
    KeywordFamily {
        dimension: Dimension::Spice,
        keywords: &["cinnamon"],
        delta: 2,
    },
    KeywordFamily {
        dimension: Dimension::Sweet,
        keywords: &["chocolate", "caramel", "sweet"],
        delta: 5,
    },
    KeywordFamily {
        dimension: Dimension::Sweet,
        keywords: &["fruit"],
        delta: 3,
    },
    KeywordFamily {
        dimension: Dimension::Earth,
        keywords: &["earth", "leather", "soil"],
        delta: 5,
    },
    KeywordFamily {
        dimension: Dimension::Earth,
        keywords: &["coffee", "toast"],
        delta: 3,
    },
    KeywordFamily {
        dimension: Dimension::Cream,
        keywords: &["cream", "butter", "milk"],
        delta: 5,
    },
    KeywordFamily {
        dimension: Dimension::Cream,
        keywords: &["nut"],
        delta: 3,
    },
    KeywordFamily {
        dimension: Dimension::Wood,
        keywords: &["cedar", "wood", "oak"],
        delta: 5,
    },
];

/// Map a declared strength to a body value
///
/// Unrecognized strengths fall through to the mild default.
pub fn body_for_strength(strength: &str) -> u32 {
    let strength = strength.to_lowercase();
    if strength.contains("full") {
        FULL_BODY
    } else if strength.contains("medium") {
        MEDIUM_BODY
    } else {
        MILD_BODY
    }
}

/// Derive a six-dimension profile from strength and free-text notes
pub fn derive_profile(strength: &str, notes: &str) -> FlavorProfile {
    let notes = notes.to_lowercase();
    let mut profile = FlavorProfile::new(
        BASELINE_LEVEL,
        BASELINE_LEVEL,
        BASELINE_LEVEL,
        BASELINE_LEVEL,
        BASELINE_LEVEL,
        body_for_strength(strength),
    );

    for family in NOTE_KEYWORD_FAMILIES.iter() {
        if family.keywords.iter().any(|keyword| notes.contains(keyword)) {
            *profile.get_mut(family.dimension) += family.delta;
        }
    }

    tracing::trace!(strength, ?profile, "Derived flavor profile");
    profile
}
