//! Format detection and decode dispatch.
//!
//! # Responsibility
//! - Detect which URL form an incoming link uses, exactly once, here.
//! - Delegate to the matching decoder without letting either decoder
//!   sniff the other's format.

use crate::codec::canonical::decode_canonical;
use crate::codec::compact::decode_compact;
use crate::codec::{parse_link_url, SHORT_FORM_SEGMENT};
use crate::model::spatial::SpatialInfo;
use log::debug;

/// Decodes an incoming URL in whichever form it carries.
///
/// A path containing the `/l/` segment is routed to the compact decoder;
/// everything else goes to the canonical decoder. Unparsable URLs decode
/// to `None`.
pub fn resolve(url: &str) -> Option<SpatialInfo> {
    let parsed = parse_link_url(url)?;

    let is_short_form = parsed
        .path_segments()
        .map(|mut segments| segments.any(|segment| segment == SHORT_FORM_SEGMENT))
        .unwrap_or(false);

    debug!(
        "event=link_resolve module=codec form={} path={}",
        if is_short_form { "compact" } else { "canonical" },
        parsed.path()
    );

    if is_short_form {
        decode_compact(url)
    } else {
        decode_canonical(url)
    }
}
