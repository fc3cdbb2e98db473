//! Command-line interface definitions.

use crate::config::DEFAULT_CONFIG;
use clap::{Args, ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Migrate BlogEngine.NET post exports to MiniBlog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print per-post details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Migrate every post in the posts directory
    #[command(visible_alias = "m")]
    Migrate {
        #[command(flatten)]
        args: MigrateArgs,
    },

    /// Migrate a single post file
    #[command(visible_alias = "p")]
    Post {
        /// Exported post file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Category catalog file
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        categories: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the normalized slug for each argument
    Slug {
        /// Raw slugs or titles
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Arguments for the `migrate` command
#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// Directory of exported post files
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub posts: Option<PathBuf>,

    /// Output directory for migrated posts
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Category catalog file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub categories: Option<PathBuf>,

    /// Stop at the first post that fails instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::parse_from([
            "postmigrate",
            "migrate",
            "--posts",
            "in",
            "-o",
            "out",
            "--fail-fast",
        ]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG));
        let Commands::Migrate { args } = cli.command else {
            panic!("expected migrate");
        };
        assert_eq!(args.posts, Some(PathBuf::from("in")));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.categories, None);
        assert!(args.fail_fast);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["postmigrate", "slug", "Hello World", "-v", "-C", "x.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::Slug { ref text } if text == &["Hello World"]));
    }

    #[test]
    fn test_slug_requires_text() {
        assert!(Cli::try_parse_from(["postmigrate", "slug"]).is_err());
    }
}
