//! Error types for parsing pairing inputs at the crate boundary
//!
//! The engine itself is total over its inputs; these errors only arise when
//! free text is parsed into the closed enumerations.

use thiserror::Error;

/// Pairing input errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("Unknown pairing category: {0}")]
    UnknownCategory(String),

    #[error("Unknown occasion: {0}")]
    UnknownOccasion(String),
}

/// Result type alias for pairing input parsing
pub type PairingResult<T> = Result<T, PairingError>;
