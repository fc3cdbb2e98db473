//! `[comments]` section configuration.
//!
//! Exported comments carry optional `approved` and `deleted` attributes. When
//! an attribute is missing, the value configured here is used instead.
//!
//! ```toml
//! [comments]
//! approved_when_absent = true
//! deleted_when_absent = true   # comments without `deleted` are dropped
//! ```
//!
//! Both default to `true`, which matches what the old exporter tooling did:
//! a comment lacking a `deleted` attribute counts as deleted.

use crate::post::CommentFlags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommentsConfig {
    /// Value of `approved` when the attribute is missing.
    pub approved_when_absent: bool,
    /// Value of `deleted` when the attribute is missing.
    pub deleted_when_absent: bool,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            approved_when_absent: true,
            deleted_when_absent: true,
        }
    }
}

impl CommentsConfig {
    /// Whether a comment with these flags survives migration.
    pub fn keeps(&self, flags: CommentFlags) -> bool {
        let approved = flags.approved.unwrap_or(self.approved_when_absent);
        let deleted = flags.deleted.unwrap_or(self.deleted_when_absent);
        approved && !deleted
    }
}
