//! Pairing engine
//!
//! Pure, synchronous, stateless functions over small catalogs held in
//! memory. Data flows one way: raw cigar attributes become a numeric
//! profile, the profile is scored against beverage archetypes, and the
//! result carries human-readable rationale.

mod catalog;
mod extractor;
mod forward;
mod menu;
mod reverse;

pub use catalog::*;
pub use extractor::*;
pub use forward::*;
pub use menu::*;
pub use reverse::*;
