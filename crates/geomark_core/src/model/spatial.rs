//! Spatial metadata value model.
//!
//! # Responsibility
//! - Define the fixed-field record attached to publishable items.
//! - Provide the co-required location check used by every encoder.
//!
//! # Invariants
//! - A record "has a location" only when latitude and longitude are both set.
//! - All fields are optional; an all-empty record is a valid value.
//! - `timestamp` is carried as text and validated, never re-normalized here.

use serde::{Deserialize, Serialize};

/// Planet name implied when coordinates are present and none was given.
pub const DEFAULT_PLANET: &str = "Earth";

/// Optional geographic/temporal descriptor for a publishable item.
///
/// This is a transient value object: it is built by a form or API layer,
/// passed through validation and encoding, and discarded. It carries no
/// identity and is never persisted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatialInfo {
    /// Free-text planet name. See [`SpatialInfo::planet_or_default`].
    pub planet: Option<String>,
    /// Degrees in [-90, 90] with 5 to 7 decimal places of precision.
    pub latitude: Option<f64>,
    /// Degrees in [-180, 180] with 5 to 7 decimal places of precision.
    pub longitude: Option<f64>,
    /// Meters above sea level, in [-500, 9000].
    pub altitude: Option<f64>,
    /// Building floor. Negative values denote below-grade levels.
    pub floor: Option<i64>,
    /// Date-time carried as text; must parse as RFC 3339 when present.
    pub timestamp: Option<String>,
}

impl SpatialInfo {
    /// Returns whether this record carries a usable location.
    ///
    /// # Contract
    /// - Latitude and longitude are co-required: either one missing means
    ///   "no location", not a partial state.
    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Returns the planet name, falling back to [`DEFAULT_PLANET`] when
    /// coordinates are present and no explicit value was given.
    ///
    /// The fallback lives here, not in the encoders, so encoded URLs carry
    /// only explicitly-present fields and round-trips stay exact.
    pub fn planet_or_default(&self) -> Option<&str> {
        match &self.planet {
            Some(planet) => Some(planet.as_str()),
            None if self.has_location() => Some(DEFAULT_PLANET),
            None => None,
        }
    }

    /// Returns whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self.planet.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.altitude.is_none()
            && self.floor.is_none()
            && self.timestamp.is_none()
    }
}
