//! Business logic services for the Humidor Pairing Platform

pub mod catalog;
pub mod pairing;

pub use catalog::CatalogService;
pub use pairing::PairingService;
