//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PairingError;

/// Beverage and food categories a cigar can be paired with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PairingCategory {
    Wine,
    Whiskey,
    Rum,
    Coffee,
    Chocolate,
    Tea,
    Spirits,
}

impl PairingCategory {
    /// Every category in declaration order
    pub const ALL: [PairingCategory; 7] = [
        PairingCategory::Wine,
        PairingCategory::Whiskey,
        PairingCategory::Rum,
        PairingCategory::Coffee,
        PairingCategory::Chocolate,
        PairingCategory::Tea,
        PairingCategory::Spirits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PairingCategory::Wine => "wine",
            PairingCategory::Whiskey => "whiskey",
            PairingCategory::Rum => "rum",
            PairingCategory::Coffee => "coffee",
            PairingCategory::Chocolate => "chocolate",
            PairingCategory::Tea => "tea",
            PairingCategory::Spirits => "spirits",
        }
    }

    /// Icon reference rendered next to a suggestion of this category
    pub fn icon(&self) -> &'static str {
        match self {
            PairingCategory::Wine => "Wine",
            PairingCategory::Whiskey | PairingCategory::Rum | PairingCategory::Spirits => {
                "GlassWater"
            }
            PairingCategory::Coffee | PairingCategory::Tea => "Coffee",
            PairingCategory::Chocolate => "Cookie",
        }
    }
}

impl std::fmt::Display for PairingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PairingCategory {
    type Err = PairingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| PairingError::UnknownCategory(s.to_string()))
    }
}

/// Context in which the pairing will be enjoyed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Occasion {
    Morning,
    Relaxing,
    Celebration,
    Evening,
}

impl Occasion {
    pub const ALL: [Occasion; 4] = [
        Occasion::Morning,
        Occasion::Relaxing,
        Occasion::Celebration,
        Occasion::Evening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Morning => "Morning",
            Occasion::Relaxing => "Relaxing",
            Occasion::Celebration => "Celebration",
            Occasion::Evening => "Evening",
        }
    }

    /// Heading shown in the guided drink-first flow
    pub fn title(&self) -> &'static str {
        match self {
            Occasion::Morning => "Morning Ritual",
            Occasion::Relaxing => "Afternoon/Relaxing",
            Occasion::Celebration => "Special Celebration",
            Occasion::Evening => "Evening Reflection",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Occasion::Morning => "A fresh start. Looking for clarity and nuance.",
            Occasion::Relaxing => "Mid-day pause. Balanced and steady.",
            Occasion::Celebration => "The best of the best. Time for the top shelf.",
            Occasion::Evening => "Unwinding after a long day. Deep and complex.",
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = PairingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PairingError::UnknownOccasion(s.to_string()))
    }
}

/// One axis of a flavor profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Spice,
    Sweet,
    Earth,
    Cream,
    Wood,
    Body,
}
