//! Post slug configuration.

use serde::{Deserialize, Serialize};

/// Which characters survive slug normalization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Transliterate Unicode → ASCII, keep `[a-z0-9]` (default).
    #[default]
    Full,
    /// Keep Unicode letters and digits, lowercased.
    Safe,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugConfig {
    /// Character policy.
    pub mode: SlugMode,
    /// Separator used between words.
    pub separator: SlugSeparator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.slug.mode, SlugMode::Full);
        assert_eq!(config.slug.separator, SlugSeparator::Dash);
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [("full", SlugMode::Full), ("safe", SlugMode::Safe)] {
            let config = test_parse_config(&format!("[slug]\nmode = \"{input}\""));
            assert_eq!(config.slug.mode, expected, "mode failed for {input}");
        }
    }

    #[test]
    fn test_separator_parsing() {
        let config = test_parse_config("[slug]\nseparator = \"underscore\"");
        assert_eq!(config.slug.separator, SlugSeparator::Underscore);
        assert_eq!(config.slug.separator.as_char(), '_');

        let config = test_parse_config("[slug]\nseparator = \"dash\"");
        assert_eq!(config.slug.separator.as_char(), '-');
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(crate::config::MigrateConfig::from_str("[slug]\nmode = \"ascii\"").is_err());
    }
}
