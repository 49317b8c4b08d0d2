//! Canonical (named query parameter) URL form.
//!
//! # Responsibility
//! - Serialize each present field as its own named parameter.
//! - Decode by parameter name, ignoring unknown names instead of storing
//!   them.
//!
//! # Invariants
//! - Absent fields produce absent parameters, never empty-string ones.
//! - A record without both coordinates encodes with no query string at all.
//! - Decoding returns `None` only for unparsable URLs; a URL with zero
//!   spatial parameters decodes to an all-empty record.

use crate::codec::{parse_link_url, LinkKind};
use crate::model::spatial::SpatialInfo;
use url::form_urlencoded;

pub(super) const PARAM_PLANET: &str = "planet";
pub(super) const PARAM_LATITUDE: &str = "lat";
pub(super) const PARAM_LONGITUDE: &str = "lng";
pub(super) const PARAM_ALTITUDE: &str = "altitude";
pub(super) const PARAM_TIMESTAMP: &str = "timestamp";
pub(super) const PARAM_FLOOR: &str = "floor";

pub(super) fn encode(base: &str, kind: LinkKind, slug: &str, info: Option<&SpatialInfo>) -> String {
    let path = format!("{base}/{kind}/{slug}");

    let info = match info {
        Some(info) if info.has_location() => info,
        _ => return path,
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(planet) = &info.planet {
        query.append_pair(PARAM_PLANET, planet);
    }
    if let Some(latitude) = info.latitude {
        query.append_pair(PARAM_LATITUDE, &latitude.to_string());
    }
    if let Some(longitude) = info.longitude {
        query.append_pair(PARAM_LONGITUDE, &longitude.to_string());
    }
    if let Some(altitude) = info.altitude {
        query.append_pair(PARAM_ALTITUDE, &altitude.to_string());
    }
    if let Some(timestamp) = &info.timestamp {
        query.append_pair(PARAM_TIMESTAMP, timestamp);
    }
    if let Some(floor) = info.floor {
        query.append_pair(PARAM_FLOOR, &floor.to_string());
    }

    format!("{path}?{}", query.finish())
}

/// Decodes the canonical form from a raw URL string.
///
/// Recognized parameters populate their field; values that fail to parse
/// for a numeric field leave that field absent. Unknown parameters are
/// dropped so the fixed-field record never accumulates foreign keys.
pub fn decode_canonical(url: &str) -> Option<SpatialInfo> {
    let parsed = parse_link_url(url)?;

    let mut info = SpatialInfo::default();
    for (name, value) in parsed.query_pairs() {
        match name.as_ref() {
            PARAM_PLANET if !value.is_empty() => info.planet = Some(value.into_owned()),
            PARAM_LATITUDE => info.latitude = value.parse().ok(),
            PARAM_LONGITUDE => info.longitude = value.parse().ok(),
            PARAM_ALTITUDE => info.altitude = value.parse().ok(),
            PARAM_TIMESTAMP if !value.is_empty() => info.timestamp = Some(value.into_owned()),
            PARAM_FLOOR => info.floor = value.parse().ok(),
            _ => {}
        }
    }

    Some(info)
}
