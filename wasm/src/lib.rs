//! WebAssembly module for the Humidor Pairing Platform
//!
//! Lets catalog, humidor, and guided-pairing views run the pairing engine
//! client-side. Results cross the boundary as JSON strings.

use humidor_shared::{
    beverage_archetypes, derive_profile, drink_menu, get_reverse_pairing, occasion_options,
    rank_pairings, synergy_score, validate_notes, validate_preference, validate_profile,
    validate_strength, FlavorProfile, Occasion, PairingCategory,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript glue
pub use humidor_shared::models::*;
pub use humidor_shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("humidor pairing engine loaded");
}

/// Derive a flavor profile from strength and tasting notes
#[wasm_bindgen(js_name = deriveFlavorProfile)]
pub fn derive_flavor_profile(strength: &str, notes: &str) -> Result<String, JsValue> {
    profile_json(strength, notes).map_err(|e| JsValue::from_str(&e))
}

/// Rank the top four beverage pairings for a cigar
#[wasm_bindgen(js_name = getSmartPairings)]
pub fn smart_pairings(strength: &str, notes: &str) -> Result<String, JsValue> {
    smart_pairings_json(strength, notes).map_err(|e| JsValue::from_str(&e))
}

/// Recommend an ideal cigar for a drink, preference, and optional occasion
#[wasm_bindgen(js_name = getReversePairing)]
pub fn reverse_pairing(
    category: &str,
    preference: &str,
    occasion: Option<String>,
) -> Result<String, JsValue> {
    reverse_pairing_json(category, preference, occasion.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// Synergy score between two profiles given as JSON
#[wasm_bindgen(js_name = calculateSynergy)]
pub fn calculate_synergy(cigar_json: &str, beverage_json: &str) -> Result<u32, JsValue> {
    synergy(cigar_json, beverage_json).map_err(|e| JsValue::from_str(&e))
}

/// Beverage archetypes used by forward matching
#[wasm_bindgen(js_name = listBeverageArchetypes)]
pub fn list_beverage_archetypes() -> Result<String, JsValue> {
    to_json(beverage_archetypes()).map_err(|e| JsValue::from_str(&e))
}

/// Drinks and occasions offered by the guided flow
#[wasm_bindgen(js_name = getPairingMenu)]
pub fn pairing_menu() -> Result<String, JsValue> {
    menu_json().map_err(|e| JsValue::from_str(&e))
}

fn profile_json(strength: &str, notes: &str) -> Result<String, String> {
    validate_strength(strength)?;
    validate_notes(notes)?;
    to_json(&derive_profile(strength, notes))
}

fn smart_pairings_json(strength: &str, notes: &str) -> Result<String, String> {
    validate_strength(strength)?;
    validate_notes(notes)?;
    let suggestions = rank_pairings(&derive_profile(strength, notes));
    log(&format!("ranked {} pairings", suggestions.len()));
    to_json(&suggestions)
}

fn reverse_pairing_json(
    category: &str,
    preference: &str,
    occasion: Option<&str>,
) -> Result<String, String> {
    validate_preference(preference)?;
    let category: PairingCategory = category.parse().map_err(|e| format!("{}", e))?;
    let occasion = occasion
        .filter(|o| !o.trim().is_empty())
        .map(str::parse::<Occasion>)
        .transpose()
        .map_err(|e| format!("{}", e))?;
    to_json(&get_reverse_pairing(category, preference, occasion))
}

fn synergy(cigar_json: &str, beverage_json: &str) -> Result<u32, String> {
    let cigar: FlavorProfile = serde_json::from_str(cigar_json)
        .map_err(|e| format!("Invalid cigar profile JSON: {}", e))?;
    let beverage: FlavorProfile = serde_json::from_str(beverage_json)
        .map_err(|e| format!("Invalid beverage profile JSON: {}", e))?;
    validate_profile(&cigar)?;
    validate_profile(&beverage)?;
    Ok(synergy_score(&cigar, &beverage))
}

#[derive(Serialize)]
struct PairingMenu {
    drinks: Vec<DrinkOption>,
    occasions: Vec<OccasionOption>,
}

fn menu_json() -> Result<String, String> {
    to_json(&PairingMenu {
        drinks: drink_menu(),
        occasions: occasion_options(),
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}
