//! HTTP handlers for the Humidor Pairing Platform

mod cigar;
mod health;
mod pairing;

pub use cigar::*;
pub use health::*;
pub use pairing::*;
