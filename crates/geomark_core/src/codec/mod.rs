//! URL codecs for spatial metadata.
//!
//! # Responsibility
//! - Encode a [`SpatialInfo`] into the canonical or compact URL form.
//! - Decode either form back, with one dispatch point in [`resolve`].
//!
//! # Invariants
//! - Encoders treat a record without both coordinates as "no location".
//! - Decoders signal malformed input by returning `None`, never by error.
//! - Neither decoder sniffs the other decoder's format.

pub mod canonical;
pub mod compact;
pub mod resolve;

use crate::model::spatial::SpatialInfo;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use url::Url;

pub use resolve::resolve;

/// Site base used when no explicit base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://yourapp.com";

/// Path segment that distinguishes the compact short-URL form.
pub const SHORT_FORM_SEGMENT: &str = "l";

/// Publishable item category carried as the `{type}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Long-form article.
    Blog,
    /// Short post.
    Post,
}

impl LinkKind {
    /// Returns the path-segment spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Post => "post",
        }
    }
}

impl Display for LinkKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized `{type}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLinkKind(pub String);

impl Display for UnknownLinkKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown link kind: {}; expected blog|post", self.0)
    }
}

impl Error for UnknownLinkKind {}

impl FromStr for LinkKind {
    type Err = UnknownLinkKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "blog" => Ok(Self::Blog),
            "post" => Ok(Self::Post),
            other => Err(UnknownLinkKind(other.to_string())),
        }
    }
}

/// URL builder bound to one site base.
///
/// Decoding is base-independent; only the encoders live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCodec {
    base: String,
}

impl Default for LinkCodec {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl LinkCodec {
    /// Creates a codec for the given site base; trailing slashes are
    /// stripped so path joining stays predictable.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Returns the configured site base.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Encodes the verbose, named-query-parameter URL form.
    pub fn encode_canonical(
        &self,
        kind: LinkKind,
        slug: &str,
        info: Option<&SpatialInfo>,
    ) -> String {
        canonical::encode(&self.base, kind, slug, info)
    }

    /// Encodes the positional, comma-delimited short URL form.
    pub fn encode_compact(&self, kind: LinkKind, slug: &str, info: Option<&SpatialInfo>) -> String {
        compact::encode(&self.base, kind, slug, info)
    }
}

/// Parses an incoming link, accepting absolute URLs and bare
/// path-plus-query strings as routing layers hand them over.
pub(crate) fn parse_link_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(DEFAULT_BASE_URL).ok()?.join(raw).ok()
        }
        Err(_) => None,
    }
}
