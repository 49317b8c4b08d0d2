//! Compact (positional, comma-delimited) short URL form.
//!
//! # Responsibility
//! - Encode the six spatial fields as fixed query positions under the
//!   `/l/` path prefix.
//! - Decode positionally, tolerating trailing truncation but never a
//!   shifted field.
//!
//! # Invariants
//! - The positional layout is a fixed-arity array: absent interior fields
//!   become empty positions so later fields keep their slot.
//! - Fewer than [`MIN_POSITIONS`] supplied positions is "not a location
//!   URL", decoding to `None`.
//! - An unparsable latitude or longitude voids the whole decode; a
//!   location is never fabricated from partial garbage.

use crate::codec::{parse_link_url, LinkKind, SHORT_FORM_SEGMENT};
use crate::model::spatial::SpatialInfo;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Fixed arity of the positional layout:
/// `planet, latitude, longitude, altitude, timestamp, floor`.
pub const POSITION_COUNT: usize = 6;

/// Minimum supplied positions for a query to count as location-bearing.
pub const MIN_POSITIONS: usize = 3;

// Only characters that would break the positional grammar are escaped, so
// the short form stays readable (`Earth,37.556074,...`, not a fully
// form-encoded blob).
const POSITION_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b',')
    .add(b'%')
    .add(b'&')
    .add(b'#')
    .add(b'?');

pub(super) fn encode(base: &str, kind: LinkKind, slug: &str, info: Option<&SpatialInfo>) -> String {
    let path = format!("{base}/{SHORT_FORM_SEGMENT}/{kind}/{slug}");

    let info = match info {
        Some(info) if info.has_location() => info,
        _ => return path,
    };

    let query = positions(info)
        .iter()
        .map(|slot| match slot {
            Some(text) => utf8_percent_encode(text, POSITION_ESCAPES).to_string(),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(",");

    format!("{path}?{query}")
}

/// Decodes the short form from a raw URL string.
pub fn decode_compact(url: &str) -> Option<SpatialInfo> {
    let parsed = parse_link_url(url)?;

    let mut segments = parsed.path_segments()?;
    if segments.next() != Some(SHORT_FORM_SEGMENT) {
        return None;
    }

    let slots: Vec<&str> = parsed.query().unwrap_or("").split(',').collect();
    if slots.len() < MIN_POSITIONS {
        return None;
    }

    let position = |index: usize| -> Option<String> {
        let raw = slots.get(index).copied().filter(|raw| !raw.is_empty())?;
        Some(percent_decode_str(raw).decode_utf8_lossy().into_owned())
    };

    let latitude: f64 = position(1)?.parse().ok()?;
    let longitude: f64 = position(2)?.parse().ok()?;

    Some(SpatialInfo {
        planet: position(0),
        latitude: Some(latitude),
        longitude: Some(longitude),
        altitude: position(3).and_then(|raw| raw.parse().ok()),
        timestamp: position(4),
        floor: position(5).and_then(|raw| raw.parse().ok()),
    })
}

/// Lays the record out as the fixed six-position array.
fn positions(info: &SpatialInfo) -> [Option<String>; POSITION_COUNT] {
    [
        info.planet.clone(),
        info.latitude.map(|value| value.to_string()),
        info.longitude.map(|value| value.to_string()),
        info.altitude.map(|value| value.to_string()),
        info.timestamp.clone(),
        info.floor.map(|value| value.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::{decode_compact, encode};
    use crate::codec::LinkKind;
    use crate::model::spatial::SpatialInfo;

    #[test]
    fn fewer_than_three_positions_is_not_a_location() {
        assert!(decode_compact("https://yourapp.com/l/post/a").is_none());
        assert!(decode_compact("https://yourapp.com/l/post/a?Earth,37.55607").is_none());
    }

    #[test]
    fn non_short_path_is_rejected() {
        assert!(decode_compact("https://yourapp.com/post/a?Earth,1.23456,2.34567").is_none());
    }

    #[test]
    fn garbage_coordinates_void_the_decode() {
        assert!(decode_compact("https://yourapp.com/l/post/a?Earth,north,2.34567").is_none());
        assert!(decode_compact("https://yourapp.com/l/post/a?Earth,,2.34567").is_none());
    }

    #[test]
    fn planet_with_comma_survives_escaping() {
        let info = SpatialInfo {
            planet: Some("Earth, mostly".to_string()),
            latitude: Some(1.23456),
            longitude: Some(2.34567),
            ..SpatialInfo::default()
        };
        let url = encode("https://yourapp.com", LinkKind::Post, "a", Some(&info));
        let decoded = decode_compact(&url).expect("escaped planet should decode");
        assert_eq!(decoded.planet.as_deref(), Some("Earth, mostly"));
    }
}
