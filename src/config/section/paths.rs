//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! posts = "export/posts"          # Directory of exported post files
//! output = "migrated"             # Destination directory
//! categories = "export/categories.xml"
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory containing one XML file per post.
    pub posts: PathBuf,
    /// Directory the migrated posts are written to.
    pub output: PathBuf,
    /// Category catalog document.
    pub categories: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            posts: "posts".into(),
            output: "migrated".into(),
            categories: "categories.xml".into(),
        }
    }
}

impl PathsConfig {
    /// Make every relative path absolute against `root`.
    pub fn normalize(&mut self, root: &Path) {
        for path in [&mut self.posts, &mut self.output, &mut self.categories] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_paths_parsing() {
        let config = test_parse_config(
            "[paths]\nposts = \"in\"\noutput = \"out\"\ncategories = \"cats.xml\"",
        );
        assert_eq!(config.paths.posts, PathBuf::from("in"));
        assert_eq!(config.paths.output, PathBuf::from("out"));
        assert_eq!(config.paths.categories, PathBuf::from("cats.xml"));
    }

    #[test]
    fn test_normalize_keeps_absolute() {
        let root = std::env::temp_dir();
        let absolute = root.join("elsewhere");
        let mut paths = PathsConfig {
            posts: absolute.clone(),
            ..PathsConfig::default()
        };
        paths.normalize(&root.join("site"));

        assert_eq!(paths.posts, absolute);
        assert_eq!(paths.output, root.join("site").join("migrated"));
        assert_eq!(paths.categories, root.join("site").join("categories.xml"));
    }
}
