//! Shared types and the pairing engine for the Humidor Pairing platform
//!
//! This crate contains the flavor model and the pure, synchronous pairing
//! logic shared between the backend, the browser (via WASM), and tests.

pub mod engine;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
