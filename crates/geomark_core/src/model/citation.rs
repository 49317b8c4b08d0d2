//! Citation value model.
//!
//! # Responsibility
//! - Define the three citation shapes attachable to a publishable item.
//! - Keep variant-specific data inside its variant instead of nullable
//!   fields on one wide record.
//!
//! # Invariants
//! - Every variant carries a `content` text bounded by
//!   [`CONTENT_MAX_CHARS`].
//! - `User` ids are restricted to `[A-Za-z0-9_]` (checked by the
//!   validator, not by construction).

use crate::model::spatial::SpatialInfo;
use serde::{Deserialize, Serialize};

/// Upper bound for citation `content`, counted in characters.
pub const CONTENT_MAX_CHARS: usize = 500;

/// A reference attached to a publishable item, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Citation {
    /// Cites a place; may carry its own spatial descriptor.
    Spatial {
        content: String,
        spatial: Option<SpatialInfo>,
    },
    /// Cites another user of the application.
    User { content: String, user_id: String },
    /// Cites an external resource by URL.
    Url { content: String, url: String },
}

impl Citation {
    /// Returns the human-readable citation text shared by every variant.
    pub fn content(&self) -> &str {
        match self {
            Self::Spatial { content, .. }
            | Self::User { content, .. }
            | Self::Url { content, .. } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Citation;

    #[test]
    fn content_is_shared_across_variants() {
        let spatial = Citation::Spatial {
            content: "filed at the courthouse".to_string(),
            spatial: None,
        };
        let user = Citation::User {
            content: "per counsel".to_string(),
            user_id: "counsel_01".to_string(),
        };
        let url = Citation::Url {
            content: "statute text".to_string(),
            url: "https://example.org/statute".to_string(),
        };

        assert_eq!(spatial.content(), "filed at the courthouse");
        assert_eq!(user.content(), "per counsel");
        assert_eq!(url.content(), "statute text");
    }
}
