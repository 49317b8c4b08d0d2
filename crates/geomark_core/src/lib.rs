//! Spatial/temporal metadata codec for published items.
//! This crate is the single source of truth for the URL formats and
//! validation rules of location-tagged posts and articles.

pub mod codec;
pub mod logging;
pub mod model;
pub mod qr;
pub mod validate;

pub use codec::canonical::decode_canonical;
pub use codec::compact::decode_compact;
pub use codec::{resolve, LinkCodec, LinkKind, UnknownLinkKind, DEFAULT_BASE_URL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::citation::{Citation, CONTENT_MAX_CHARS};
pub use model::spatial::{SpatialInfo, DEFAULT_PLANET};
pub use qr::{encode_with_qr, QrError, QrGenerator, QrLink, UrlForm};
pub use validate::{validate_citation, validate_spatial, Violation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
