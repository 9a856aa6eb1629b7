//! Flavor profile models

use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// Six-dimension flavor profile of a cigar or a beverage
///
/// Each dimension is intended to range 0-10. Keyword matches during
/// extraction stack additively and are not clamped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FlavorProfile {
    pub spice: u32,
    pub sweet: u32,
    pub earth: u32,
    pub cream: u32,
    pub wood: u32,
    /// Intensity, driven by declared strength only
    pub body: u32,
}

impl FlavorProfile {
    /// Scale ceiling shared by every dimension
    pub const SCALE_MAX: u32 = 10;

    pub const fn new(spice: u32, sweet: u32, earth: u32, cream: u32, wood: u32, body: u32) -> Self {
        Self {
            spice,
            sweet,
            earth,
            cream,
            wood,
            body,
        }
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Spice => self.spice,
            Dimension::Sweet => self.sweet,
            Dimension::Earth => self.earth,
            Dimension::Cream => self.cream,
            Dimension::Wood => self.wood,
            Dimension::Body => self.body,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut u32 {
        match dimension {
            Dimension::Spice => &mut self.spice,
            Dimension::Sweet => &mut self.sweet,
            Dimension::Earth => &mut self.earth,
            Dimension::Cream => &mut self.cream,
            Dimension::Wood => &mut self.wood,
            Dimension::Body => &mut self.body,
        }
    }

    /// Whether every dimension is within 0-10
    pub fn is_within_scale(&self) -> bool {
        [
            self.spice,
            self.sweet,
            self.earth,
            self.cream,
            self.wood,
            self.body,
        ]
        .iter()
        .all(|value| *value <= Self::SCALE_MAX)
    }
}

/// Subset of a profile picked for display (`profileMatch` on the wire)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialFlavorProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweet: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cream: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wood: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<u32>,
}

impl PartialFlavorProfile {
    /// Build from `(dimension, value)` pairs; later pairs win
    pub fn from_entries(entries: &[(Dimension, u32)]) -> Self {
        let mut partial = Self::default();
        for (dimension, value) in entries {
            let slot = match dimension {
                Dimension::Spice => &mut partial.spice,
                Dimension::Sweet => &mut partial.sweet,
                Dimension::Earth => &mut partial.earth,
                Dimension::Cream => &mut partial.cream,
                Dimension::Wood => &mut partial.wood,
                Dimension::Body => &mut partial.body,
            };
            *slot = Some(*value);
        }
        partial
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_reads_each_dimension() {
        let profile = FlavorProfile::new(1, 2, 3, 4, 5, 6);
        assert_eq!(profile.get(Dimension::Spice), 1);
        assert_eq!(profile.get(Dimension::Wood), 5);
        assert_eq!(profile.get(Dimension::Body), 6);
    }

    #[test]
    fn test_within_scale() {
        assert!(FlavorProfile::new(10, 0, 5, 5, 5, 9).is_within_scale());
        assert!(!FlavorProfile::new(11, 0, 5, 5, 5, 9).is_within_scale());
    }

    #[test]
    fn test_partial_profile_skips_absent_keys() {
        let partial =
            PartialFlavorProfile::from_entries(&[(Dimension::Body, 9), (Dimension::Wood, 7)]);
        let json = serde_json::to_value(&partial).unwrap();
        assert_eq!(json, serde_json::json!({ "body": 9, "wood": 7 }));
        assert!(!partial.is_empty());
        assert!(PartialFlavorProfile::default().is_empty());
    }
}
