//! HTTP handlers for forward and reverse pairing

use axum::Json;
use humidor_shared::{BeverageArchetype, FlavorProfile, ReversePairing};

use crate::{
    error::AppResult,
    services::pairing::{CigarAttributesInput, PairingMenu, ReversePairingInput, SmartPairings},
    services::PairingService,
};

/// Rank beverage pairings for a cigar's strength and notes
pub async fn get_smart_pairings(
    Json(input): Json<CigarAttributesInput>,
) -> AppResult<Json<SmartPairings>> {
    let service = PairingService::new();
    let pairings = service.smart_pairings(&input)?;
    Ok(Json(pairings))
}

/// Derive the flavor profile for a cigar's strength and notes
pub async fn derive_flavor_profile(
    Json(input): Json<CigarAttributesInput>,
) -> AppResult<Json<FlavorProfile>> {
    let service = PairingService::new();
    let profile = service.derive_profile(&input)?;
    Ok(Json(profile))
}

/// Recommend an ideal cigar for a drink
pub async fn get_reverse_pairing(
    Json(input): Json<ReversePairingInput>,
) -> AppResult<Json<ReversePairing>> {
    let service = PairingService::new();
    let pairing = service.reverse_pairing(&input)?;
    Ok(Json(pairing))
}

/// List the beverage archetypes used for forward matching
pub async fn list_beverage_archetypes() -> Json<&'static [BeverageArchetype]> {
    Json(PairingService::new().archetypes())
}

/// List drinks and occasions for the guided flow
pub async fn get_pairing_menu() -> Json<PairingMenu> {
    Json(PairingService::new().menu())
}
