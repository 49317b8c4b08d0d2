//! Field-level and cross-field validation.
//!
//! # Responsibility
//! - Check every rule independently and report all failures in one pass.
//! - Stay pure and total: no side effects, no panics, always return.
//!
//! # Invariants
//! - Validators never reject by returning `Err` or throwing; an empty
//!   violation list is the pass signal.
//! - Precision rules are representational: they are measured on the
//!   shortest decimal rendering of the value, not on a rounded copy.

use crate::model::citation::{Citation, CONTENT_MAX_CHARS};
use crate::model::spatial::SpatialInfo;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Latitude domain in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Longitude domain in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
/// Altitude domain in meters above sea level.
pub const ALTITUDE_RANGE: (f64, f64) = (-500.0, 9000.0);
/// Required fractional digit count for coordinates, inclusive.
pub const COORDINATE_PRECISION: (usize, usize) = (5, 7);

static USER_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]*$").expect("user id pattern must compile")
});

/// One human-readable description of a failed validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    LatitudeOutOfRange(f64),
    LatitudePrecision { digits: usize },
    LongitudeOutOfRange(f64),
    LongitudePrecision { digits: usize },
    AltitudeOutOfRange(f64),
    InvalidTimestamp(String),
    EmptyContent,
    ContentTooLong { chars: usize },
    InvalidCitationUrl(String),
    InvalidUserId(String),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LatitudeOutOfRange(value) => {
                write!(f, "latitude {value} is outside [-90, 90] degrees")
            }
            Self::LatitudePrecision { digits } => write!(
                f,
                "latitude must carry 5 to 7 decimal places, got {digits}"
            ),
            Self::LongitudeOutOfRange(value) => {
                write!(f, "longitude {value} is outside [-180, 180] degrees")
            }
            Self::LongitudePrecision { digits } => write!(
                f,
                "longitude must carry 5 to 7 decimal places, got {digits}"
            ),
            Self::AltitudeOutOfRange(value) => {
                write!(f, "altitude {value} is outside [-500, 9000] meters")
            }
            Self::InvalidTimestamp(value) => {
                write!(f, "invalid timestamp format: {value}")
            }
            Self::EmptyContent => write!(f, "citation content must not be empty"),
            Self::ContentTooLong { chars } => write!(
                f,
                "citation content exceeds {CONTENT_MAX_CHARS} characters, got {chars}"
            ),
            Self::InvalidCitationUrl(value) => {
                write!(f, "citation url is not a well-formed URL: {value}")
            }
            Self::InvalidUserId(value) => write!(
                f,
                "citation user id may only contain letters, digits and underscore: {value}"
            ),
        }
    }
}

impl Error for Violation {}

/// Checks every spatial rule and returns all failures together.
///
/// # Contract
/// - Absent fields produce no violations.
/// - Rules are independent; one bad field never masks another.
pub fn validate_spatial(info: &SpatialInfo) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(latitude) = info.latitude {
        if !in_range(latitude, LATITUDE_RANGE) {
            violations.push(Violation::LatitudeOutOfRange(latitude));
        }
        let digits = fractional_digits(latitude);
        if !in_precision(digits) {
            violations.push(Violation::LatitudePrecision { digits });
        }
    }

    if let Some(longitude) = info.longitude {
        if !in_range(longitude, LONGITUDE_RANGE) {
            violations.push(Violation::LongitudeOutOfRange(longitude));
        }
        let digits = fractional_digits(longitude);
        if !in_precision(digits) {
            violations.push(Violation::LongitudePrecision { digits });
        }
    }

    if let Some(altitude) = info.altitude {
        if !in_range(altitude, ALTITUDE_RANGE) {
            violations.push(Violation::AltitudeOutOfRange(altitude));
        }
    }

    // Floor is typed as an integer, so the whole-number rule holds by
    // construction; parse boundaries drop fractional floor text instead.

    if let Some(timestamp) = &info.timestamp {
        if DateTime::parse_from_rfc3339(timestamp).is_err() {
            violations.push(Violation::InvalidTimestamp(timestamp.clone()));
        }
    }

    violations
}

/// Checks citation rules, including the nested spatial descriptor of a
/// `Spatial` citation, and returns all failures together.
pub fn validate_citation(citation: &Citation) -> Vec<Violation> {
    let mut violations = Vec::new();

    let content = citation.content();
    if content.is_empty() {
        violations.push(Violation::EmptyContent);
    } else {
        let chars = content.chars().count();
        if chars > CONTENT_MAX_CHARS {
            violations.push(Violation::ContentTooLong { chars });
        }
    }

    match citation {
        Citation::Spatial {
            spatial: Some(info),
            ..
        } => violations.extend(validate_spatial(info)),
        Citation::Spatial { spatial: None, .. } => {}
        Citation::User { user_id, .. } => {
            if !USER_ID_PATTERN.is_match(user_id) {
                violations.push(Violation::InvalidUserId(user_id.clone()));
            }
        }
        Citation::Url { url, .. } => {
            if Url::parse(url).is_err() {
                violations.push(Violation::InvalidCitationUrl(url.clone()));
            }
        }
    }

    violations
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    (min..=max).contains(&value)
}

fn in_precision(digits: usize) -> bool {
    let (min, max) = COORDINATE_PRECISION;
    (min..=max).contains(&digits)
}

/// Counts fractional decimal digits of the shortest rendering of `value`.
///
/// Rust's `Display` for floats prints the shortest decimal text that
/// round-trips, without exponents, so the count reflects the precision a
/// caller actually supplied rather than binary representation noise.
fn fractional_digits(value: f64) -> usize {
    let rendered = value.to_string();
    match rendered.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}
