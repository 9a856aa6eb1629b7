//! Domain models for the Humidor Pairing platform

mod archetype;
mod pairing;
mod profile;

pub use archetype::*;
pub use pairing::*;
pub use profile::*;
