//! Validation utilities for pairing inputs
//!
//! The engine accepts any text. These checks run at the outer surfaces
//! (HTTP, WASM) to reject oversized payloads before they reach it.

use crate::models::FlavorProfile;

pub const MAX_STRENGTH_LEN: usize = 64;
pub const MAX_NOTES_LEN: usize = 2000;
pub const MAX_PREFERENCE_LEN: usize = 200;

// ============================================================================
// Free-text Validations
// ============================================================================

/// Validate declared strength text
pub fn validate_strength(strength: &str) -> Result<(), &'static str> {
    if strength.chars().count() > MAX_STRENGTH_LEN {
        return Err("Strength must be at most 64 characters");
    }
    Ok(())
}

/// Validate tasting notes text
pub fn validate_notes(notes: &str) -> Result<(), &'static str> {
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err("Notes must be at most 2000 characters");
    }
    Ok(())
}

/// Validate a drink preference string
pub fn validate_preference(preference: &str) -> Result<(), &'static str> {
    if preference.chars().count() > MAX_PREFERENCE_LEN {
        return Err("Preference must be at most 200 characters");
    }
    Ok(())
}

// ============================================================================
// Profile Validations
// ============================================================================

/// Validate an externally supplied profile sits on the 0-10 scale
pub fn validate_profile(profile: &FlavorProfile) -> Result<(), &'static str> {
    if !profile.is_within_scale() {
        return Err("Flavor profile dimensions must be between 0 and 10");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_strength() {
        assert!(validate_strength("Medium-Full").is_ok());
        assert!(validate_strength("").is_ok());
        assert!(validate_strength(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_notes_counts_chars() {
        // Multi-byte characters count once
        assert!(validate_notes(&"é".repeat(2000)).is_ok());
        assert!(validate_notes(&"é".repeat(2001)).is_err());
    }

    #[test]
    fn test_validate_preference() {
        assert!(validate_preference("Bold Red").is_ok());
        assert!(validate_preference(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_profile() {
        assert!(validate_profile(&FlavorProfile::new(2, 2, 2, 2, 2, 3)).is_ok());
        assert!(validate_profile(&FlavorProfile::new(2, 2, 12, 2, 2, 3)).is_err());
    }
}
