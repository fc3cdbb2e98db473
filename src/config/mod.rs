//! Migration configuration for `postmigrate.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [paths], [slug], [content], [comments]
//! ├── error.rs       # ConfigError
//! └── mod.rs         # MigrateConfig (this file)
//! ```
//!
//! The config file is optional. Without one, every section uses its
//! defaults and relative paths resolve against the current directory.
//! Command-line flags override whatever the file says.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{CommentsConfig, ContentConfig, PathsConfig, SlugConfig, SlugMode};

#[cfg(test)]
pub use section::SlugSeparator;

use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG: &str = "postmigrate.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing postmigrate.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Input and output locations
    pub paths: PathsConfig,

    /// Slug normalization policy
    pub slug: SlugConfig,

    /// Content rewrite settings
    pub content: ContentConfig,

    /// Comment flag defaults
    pub comments: CommentsConfig,
}

impl MigrateConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// A missing config file is fine when the default name is used; an
    /// explicitly requested file must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = cwd.join(&cli.config);

        let mut config = if config_path.is_file() {
            let mut config = Self::from_path(&config_path)?;
            config.root = config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            config.config_path = Some(config_path);
            config
        } else if cli.config != Path::new(DEFAULT_CONFIG) {
            let err = io::Error::new(io::ErrorKind::NotFound, "config file not found");
            return Err(ConfigError::Io(config_path, err).into());
        } else {
            debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
            Self {
                root: cwd,
                ..Self::default()
            }
        };

        config.paths.normalize(&config.root);
        config.apply_command_options(&cli.command);
        config.validate(&cli.command)?;

        if let Some(path) = &config.config_path {
            debug!("config"; "loaded {}", path.display());
        }
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Migrate { args } => {
                Self::update_option(&mut self.paths.posts, args.posts.as_ref());
                Self::update_option(&mut self.paths.output, args.output.as_ref());
                Self::update_option(&mut self.paths.categories, args.categories.as_ref());
            }
            Commands::Post { categories, .. } => {
                Self::update_option(&mut self.paths.categories, categories.as_ref());
            }
            Commands::Slug { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the merged configuration for `command`.
    ///
    /// Directory checks only apply to `migrate`, the one command that reads
    /// `posts` and writes `output`.
    pub fn validate(&self, command: &Commands) -> Result<(), ConfigError> {
        if self.content.files_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[content.files_prefix] must not be empty".to_string(),
            ));
        }

        if matches!(command, Commands::Migrate { .. }) && self.paths.posts == self.paths.output {
            return Err(ConfigError::Validation(format!(
                "[paths.output] must differ from [paths.posts] ({}), posts would be overwritten",
                self.paths.posts.display()
            )));
        }

        Ok(())
    }
}

/// Parse a config string in tests, panicking on invalid input.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> MigrateConfig {
    MigrateConfig::from_str(content).expect("test config should parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Parse a command line the way `main` does.
    fn command(args: &[&str]) -> Commands {
        let argv = std::iter::once("postmigrate").chain(args.iter().copied());
        Cli::parse_from(argv).command
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
[paths]
posts = "export"
output = "out"
categories = "export/categories.xml"

[slug]
mode = "safe"
separator = "underscore"

[content]
files_prefix = "/files/"

[comments]
deleted_when_absent = false
"#,
        );

        assert_eq!(config.paths.posts, PathBuf::from("export"));
        assert_eq!(config.slug.mode, SlugMode::Safe);
        assert_eq!(config.slug.separator, SlugSeparator::Underscore);
        assert_eq!(config.content.files_prefix, "/files/");
        assert!(config.comments.approved_when_absent);
        assert!(!config.comments.deleted_when_absent);
        assert!(config.validate(&command(&["migrate"])).is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            MigrateConfig::from_str("[paths\nposts = 1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) = MigrateConfig::parse_with_ignored(
            "[slug]\nmode = \"full\"\ncase = \"upper\"\n\n[extra]\nkey = 1",
        )
        .unwrap();

        assert_eq!(config.slug.mode, SlugMode::Full);
        assert!(ignored.contains(&"slug.case".to_string()));
        assert!(ignored.contains(&"extra".to_string()));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let config = test_parse_config("[content]\nfiles_prefix = \" \"");
        assert!(matches!(
            config.validate(&command(&["slug", "x"])),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_output_equal_to_posts() {
        let config = test_parse_config("[paths]\nposts = \"same\"\noutput = \"same\"");
        let err = config.validate(&command(&["migrate"])).unwrap_err();
        assert!(err.to_string().contains("paths.output"));
    }

    #[test]
    fn test_same_posts_and_output_allowed_outside_migrate() {
        let config = test_parse_config("[paths]\nposts = \"same\"\noutput = \"same\"");
        assert!(config.validate(&command(&["post", "p.xml"])).is_ok());
        assert!(config.validate(&command(&["slug", "Hello"])).is_ok());
    }

    #[test]
    fn test_cli_overrides_paths() {
        let mut config = test_parse_config("[paths]\nposts = \"a\"\noutput = \"b\"");
        let cmd = command(&["migrate", "-o", "elsewhere", "--categories", "cats.xml"]);
        config.apply_command_options(&cmd);

        assert_eq!(config.paths.posts, PathBuf::from("a"));
        assert_eq!(config.paths.output, PathBuf::from("elsewhere"));
        assert_eq!(config.paths.categories, PathBuf::from("cats.xml"));
    }

    #[test]
    fn test_post_command_overrides_categories_only() {
        let mut config = test_parse_config("");
        let cmd = command(&["post", "p.xml", "--categories", "c.xml", "-o", "o.xml"]);
        config.apply_command_options(&cmd);

        assert_eq!(config.paths.categories, PathBuf::from("c.xml"));
        assert_eq!(config.paths.output, PathBuf::from("migrated"));
    }
}
