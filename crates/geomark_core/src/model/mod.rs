//! Value model for spatial metadata and citations.
//!
//! # Responsibility
//! - Define the transient records exchanged with the form/API layer.
//! - Keep one fixed-field shape per concept instead of loose field bags.
//!
//! # Invariants
//! - Records carry no identity and are never persisted by this crate.
//! - Latitude/longitude are only meaningful as a pair.

pub mod citation;
pub mod spatial;
