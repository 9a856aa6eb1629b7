//! Static catalog rows for beverages and cigars

use serde::{Serialize, Serializer};

use crate::models::{FlavorProfile, PairingSuggestion, PartialFlavorProfile, ReversePairing};
use crate::types::{Dimension, PairingCategory};

/// A fixed beverage reference point used as a forward-match target
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageArchetype {
    pub category: PairingCategory,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub why_it_works: &'static str,
    pub sommelier_tip: &'static str,
    /// Dimensions shown to the user; independent of the scoring weights
    #[serde(rename = "profileMatch", serialize_with = "serialize_highlights")]
    pub highlights: &'static [(Dimension, u32)],
    /// Full profile compared against the cigar
    pub profile: FlavorProfile,
}

impl BeverageArchetype {
    pub fn profile_match(&self) -> PartialFlavorProfile {
        PartialFlavorProfile::from_entries(self.highlights)
    }

    /// Materialize a scored suggestion for this archetype
    pub fn to_suggestion(&self, synergy_score: u32) -> PairingSuggestion {
        PairingSuggestion {
            category: self.category,
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            description: self.description.to_string(),
            why_it_works: self.why_it_works.to_string(),
            sommelier_tip: self.sommelier_tip.to_string(),
            icon: self.category.icon().to_string(),
            synergy_score,
            profile_match: self.profile_match(),
        }
    }
}

fn serialize_highlights<S>(
    highlights: &&'static [(Dimension, u32)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    PartialFlavorProfile::from_entries(highlights).serialize(serializer)
}

/// A fixed ideal-cigar description selected by reverse matching
#[derive(Debug, Clone)]
pub struct CigarArchetype {
    pub title: &'static str,
    pub ideal_profile: &'static str,
    pub why_it_works: &'static str,
    pub sommelier_tip: &'static str,
    pub suggested_tags: &'static [&'static str],
    pub profile: Option<FlavorProfile>,
}

impl From<&CigarArchetype> for ReversePairing {
    fn from(archetype: &CigarArchetype) -> Self {
        ReversePairing {
            title: archetype.title.to_string(),
            ideal_profile: archetype.ideal_profile.to_string(),
            why_it_works: archetype.why_it_works.to_string(),
            sommelier_tip: archetype.sommelier_tip.to_string(),
            suggested_tags: archetype
                .suggested_tags
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            profile: archetype.profile,
        }
    }
}
