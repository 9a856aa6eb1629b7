//! Pairing result models

use serde::{Deserialize, Serialize};

use crate::models::{FlavorProfile, PartialFlavorProfile};
use crate::types::{Occasion, PairingCategory};

/// One scored beverage archetype (forward match result)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PairingSuggestion {
    pub category: PairingCategory,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub why_it_works: String,
    pub sommelier_tip: String,
    pub icon: String,
    /// 0-100, higher is a closer match
    pub synergy_score: u32,
    pub profile_match: PartialFlavorProfile,
}

/// Ideal cigar recommendation for a beverage (reverse match result)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReversePairing {
    pub title: String,
    pub ideal_profile: String,
    pub why_it_works: String,
    pub sommelier_tip: String,
    pub suggested_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<FlavorProfile>,
}

/// A drink the guided flow offers, with its preference presets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DrinkOption {
    pub category: PairingCategory,
    pub label: String,
    pub icon: String,
    pub preferences: Vec<String>,
}

/// An occasion the guided flow offers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OccasionOption {
    pub occasion: Occasion,
    pub title: String,
    pub description: String,
}

impl From<Occasion> for OccasionOption {
    fn from(occasion: Occasion) -> Self {
        Self {
            occasion,
            title: occasion.title().to_string(),
            description: occasion.description().to_string(),
        }
    }
}
