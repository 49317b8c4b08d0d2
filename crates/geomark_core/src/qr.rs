//! QR-generation collaborator seam.
//!
//! # Responsibility
//! - Define the opaque interface this crate hands encoded URLs to.
//! - Keep an already-computed URL intact when the collaborator fails.
//!
//! # Invariants
//! - The URL is computed before the collaborator is called; no outcome of
//!   the call mutates it.
//! - No retry policy lives here; retrying belongs to the caller.

use crate::codec::{LinkCodec, LinkKind};
use crate::model::spatial::SpatialInfo;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collaborator failure reported back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// The generator backend failed or timed out.
    Generation(String),
}

impl Display for QrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation(message) => write!(f, "qr generation failed: {message}"),
        }
    }
}

impl Error for QrError {}

/// Opaque QR-image producer: URL string in, image bytes out.
pub trait QrGenerator {
    fn generate(&self, url: &str) -> Result<Vec<u8>, QrError>;
}

/// Which URL form to hand to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlForm {
    Canonical,
    Compact,
}

/// An encoded link paired with the QR outcome for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrLink {
    /// The encoded URL, valid regardless of the image outcome.
    pub url: String,
    /// Image bytes, or the collaborator's failure.
    pub image: Result<Vec<u8>, QrError>,
}

/// Encodes a link and asks the collaborator for its QR image.
///
/// # Contract
/// - The returned `url` is always the successfully encoded link, even
///   when `image` carries a failure.
pub fn encode_with_qr(
    codec: &LinkCodec,
    generator: &dyn QrGenerator,
    form: UrlForm,
    kind: LinkKind,
    slug: &str,
    info: Option<&SpatialInfo>,
) -> QrLink {
    let url = match form {
        UrlForm::Canonical => codec.encode_canonical(kind, slug, info),
        UrlForm::Compact => codec.encode_compact(kind, slug, info),
    };

    let image = generator.generate(&url);
    if let Err(error) = &image {
        warn!("event=qr_generation module=qr status=error detail={error}");
    }

    QrLink { url, image }
}
