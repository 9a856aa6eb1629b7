//! Pairing service
//!
//! Validates request text, parses the closed enumerations, and calls the
//! shared pairing engine. Holds no state between calls.

use humidor_shared::{
    beverage_archetypes, derive_profile, drink_menu, get_reverse_pairing, occasion_options,
    rank_pairings, validate_notes, validate_preference, validate_strength, BeverageArchetype,
    DrinkOption, FlavorProfile, Occasion, OccasionOption, PairingCategory, PairingSuggestion,
    ReversePairing,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::catalog::CigarRecord;

/// Pairing service for forward and reverse recommendations
#[derive(Clone, Default)]
pub struct PairingService;

/// Input describing a cigar by its declared strength and tasting notes
#[derive(Debug, Deserialize)]
pub struct CigarAttributesInput {
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub notes: String,
}

/// Input for the drink-first flow
#[derive(Debug, Deserialize)]
pub struct ReversePairingInput {
    pub category: String,
    #[serde(default)]
    pub preference: String,
    pub occasion: Option<String>,
}

/// Forward match result with the derived cigar profile
#[derive(Debug, Serialize)]
pub struct SmartPairings {
    pub profile: FlavorProfile,
    pub suggestions: Vec<PairingSuggestion>,
}

/// Ranked pairings for a stored catalog cigar
#[derive(Debug, Serialize)]
pub struct CigarPairings {
    pub cigar: CigarRecord,
    pub profile: FlavorProfile,
    pub suggestions: Vec<PairingSuggestion>,
}

/// Choices offered by the guided flow
#[derive(Debug, Serialize)]
pub struct PairingMenu {
    pub drinks: Vec<DrinkOption>,
    pub occasions: Vec<OccasionOption>,
}

impl PairingService {
    /// Create a new PairingService instance
    pub fn new() -> Self {
        Self
    }

    /// Derive a flavor profile without ranking
    pub fn derive_profile(&self, input: &CigarAttributesInput) -> AppResult<FlavorProfile> {
        validate_attributes(input)?;
        Ok(derive_profile(&input.strength, &input.notes))
    }

    /// Rank beverage archetypes for a cigar
    pub fn smart_pairings(&self, input: &CigarAttributesInput) -> AppResult<SmartPairings> {
        let profile = self.derive_profile(input)?;
        let suggestions = rank_pairings(&profile);

        tracing::info!(
            strength = %input.strength,
            top_score = suggestions.first().map(|s| s.synergy_score),
            "Computed smart pairings"
        );

        Ok(SmartPairings {
            profile,
            suggestions,
        })
    }

    /// Rank beverage archetypes for a stored cigar
    pub fn pair_catalog_cigar(&self, cigar: CigarRecord) -> CigarPairings {
        let profile = derive_profile(&cigar.strength, &cigar.notes);
        let suggestions = rank_pairings(&profile);

        tracing::info!(cigar_id = %cigar.id, "Computed pairings for catalog cigar");

        CigarPairings {
            cigar,
            profile,
            suggestions,
        }
    }

    /// Recommend an ideal cigar for a drink preference and occasion
    pub fn reverse_pairing(&self, input: &ReversePairingInput) -> AppResult<ReversePairing> {
        validate_preference(&input.preference)
            .map_err(|msg| AppError::validation("preference", msg))?;

        let category: PairingCategory = input.category.parse()?;
        let occasion = input
            .occasion
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .map(str::parse::<Occasion>)
            .transpose()?;

        let pairing = get_reverse_pairing(category, &input.preference, occasion);

        tracing::info!(
            %category,
            occasion = occasion.map(|o| o.as_str()),
            title = %pairing.title,
            "Computed reverse pairing"
        );

        Ok(pairing)
    }

    /// The fixed beverage catalog
    pub fn archetypes(&self) -> &'static [BeverageArchetype] {
        beverage_archetypes()
    }

    /// Drinks and occasions for the guided flow
    pub fn menu(&self) -> PairingMenu {
        PairingMenu {
            drinks: drink_menu(),
            occasions: occasion_options(),
        }
    }
}

fn validate_attributes(input: &CigarAttributesInput) -> AppResult<()> {
    validate_strength(&input.strength).map_err(|msg| AppError::validation("strength", msg))?;
    validate_notes(&input.notes).map_err(|msg| AppError::validation("notes", msg))?;
    Ok(())
}
