//! Forward matching: cigar profile to ranked beverage archetypes

use crate::engine::{beverage_archetypes, derive_profile};
use crate::models::{FlavorProfile, PairingSuggestion};
use crate::types::Dimension;

/// Number of suggestions returned by a forward match
pub const MAX_SUGGESTIONS: usize = 4;

/// Upper bound of the synergy scale
pub const MAX_SYNERGY_SCORE: u32 = 100;

/// Weight of one dimension in the dissimilarity measure, in half-units
///
/// A weight of 2 counts the absolute difference fully, a weight of 1 counts
/// half of it. Carrying half-units keeps the arithmetic exact.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeight {
    pub dimension: Dimension,
    pub half_units: u32,
}

/// Dimensions that participate in ranking. Sweet, cream and wood are
/// displayed but never scored.
pub static SCORING_WEIGHTS: [ScoringWeight; 3] = [
    ScoringWeight {
        dimension: Dimension::Body,
        half_units: 2,
    },
    ScoringWeight {
        dimension: Dimension::Earth,
        half_units: 1,
    },
    ScoringWeight {
        dimension: Dimension::Spice,
        half_units: 1,
    },
];

/// Score lost per half-unit of difference (8 per whole unit)
const PENALTY_PER_HALF_UNIT: u32 = 4;

/// Weighted dissimilarity between two profiles, in half-units
pub fn weighted_difference(cigar: &FlavorProfile, beverage: &FlavorProfile) -> u32 {
    SCORING_WEIGHTS
        .iter()
        .map(|weight| {
            cigar
                .get(weight.dimension)
                .abs_diff(beverage.get(weight.dimension))
                .saturating_mul(weight.half_units)
        })
        .fold(0, u32::saturating_add)
}

/// Synergy between a cigar and a beverage, clamped to 0-100
pub fn synergy_score(cigar: &FlavorProfile, beverage: &FlavorProfile) -> u32 {
    let penalty = weighted_difference(cigar, beverage).saturating_mul(PENALTY_PER_HALF_UNIT);
    MAX_SYNERGY_SCORE.saturating_sub(penalty)
}

/// Score every beverage archetype against a profile and keep the best four
///
/// Equal scores keep catalog declaration order.
pub fn rank_pairings(cigar: &FlavorProfile) -> Vec<PairingSuggestion> {
    let mut suggestions: Vec<PairingSuggestion> = beverage_archetypes()
        .iter()
        .map(|archetype| archetype.to_suggestion(synergy_score(cigar, &archetype.profile)))
        .collect();

    // sort_by is stable
    suggestions.sort_by(|a, b| b.synergy_score.cmp(&a.synergy_score));
    suggestions.truncate(MAX_SUGGESTIONS);

    tracing::debug!(
        top = suggestions.first().map(|s| s.title.as_str()),
        count = suggestions.len(),
        "Ranked beverage pairings"
    );

    suggestions
}

/// Rank beverage pairings for a cigar described by strength and notes
pub fn get_smart_pairings(strength: &str, notes: &str) -> Vec<PairingSuggestion> {
    rank_pairings(&derive_profile(strength, notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PairingCategory;

    fn titles(suggestions: &[PairingSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_weighted_difference_counts_body_fully() {
        let a = FlavorProfile::new(0, 0, 0, 0, 0, 0);
        let b = FlavorProfile::new(0, 0, 0, 0, 0, 3);
        // |0-3| * 1.0 = 3.0 = 6 half-units
        assert_eq!(weighted_difference(&a, &b), 6);
        assert_eq!(synergy_score(&a, &b), 76);
    }

    #[test]
    fn test_unscored_dimensions_ignored() {
        let a = FlavorProfile::new(5, 0, 5, 0, 0, 5);
        let b = FlavorProfile::new(5, 10, 5, 10, 10, 5);
        assert_eq!(synergy_score(&a, &b), 100);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let a = FlavorProfile::new(0, 0, 0, 0, 0, 0);
        let b = FlavorProfile::new(10, 0, 10, 0, 0, 10);
        assert_eq!(synergy_score(&a, &b), 0);
    }

    #[test]
    fn test_off_scale_input_saturates() {
        let zero = FlavorProfile::new(0, 0, 0, 0, 0, 0);
        let huge = FlavorProfile::new(u32::MAX, 0, u32::MAX, 0, 0, u32::MAX);
        assert_eq!(weighted_difference(&zero, &huge), u32::MAX);
        assert_eq!(synergy_score(&zero, &huge), 0);

        let body_only = FlavorProfile::new(0, 0, 0, 0, 0, u32::MAX);
        assert_eq!(synergy_score(&zero, &body_only), 0);
    }

    #[test]
    fn test_full_pepper_leather_ranking() {
        let suggestions = get_smart_pairings("Full", "pepper, leather, smoke");
        let scores: Vec<u32> = suggestions.iter().map(|s| s.synergy_score).collect();
        assert_eq!(
            titles(&suggestions),
            vec![
                "Cabernet Sauvignon",
                "Peated Islay Malt",
                "85% Single Origin Cacao",
                "Aged Caribbean Dark Rum",
            ]
        );
        assert_eq!(scores, vec![88, 84, 80, 64]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Baseline mild profile: wine and chocolate both score 24
        let suggestions = get_smart_pairings("Mild", "");
        let scores: Vec<u32> = suggestions.iter().map(|s| s.synergy_score).collect();
        assert_eq!(scores, vec![48, 36, 24, 24]);
        assert_eq!(suggestions[2].category, PairingCategory::Wine);
        assert_eq!(suggestions[3].category, PairingCategory::Chocolate);
    }

    #[test]
    fn test_rank_accepts_external_profile() {
        let islay = FlavorProfile::new(8, 2, 6, 1, 9, 10);
        let suggestions = rank_pairings(&islay);
        assert_eq!(suggestions[0].title, "Peated Islay Malt");
        assert_eq!(suggestions[0].synergy_score, 100);
    }
}
