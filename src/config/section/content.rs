//! `[content]` section configuration.

use serde::{Deserialize, Serialize};

/// Canonical location of uploaded files in the target blog.
pub const DEFAULT_FILES_PREFIX: &str = "/posts/files/";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
    /// Prefix that replaces legacy `file.axd?file=` / `image.axd?picture=` links.
    pub files_prefix: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            files_prefix: DEFAULT_FILES_PREFIX.to_string(),
        }
    }
}
