//! postmigrate - move BlogEngine.NET post exports over to MiniBlog.

mod catalog;
mod cli;
mod config;
mod logger;
mod pipeline;
mod post;
mod utils;
mod xml;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::MigrateConfig;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = MigrateConfig::load(&cli)?;

    match &cli.command {
        Commands::Migrate { args } => {
            let summary = cli::migrate::migrate_all(&config, args.fail_fast)?;
            if summary.failed > 0 {
                bail!("{} of {} posts failed to migrate", summary.failed, summary.total());
            }
            Ok(())
        }
        Commands::Post { file, output, .. } => {
            let mut stdout = io::stdout().lock();
            cli::post::migrate_post(&config, file, output.as_deref(), &mut stdout)?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Slug { text } => {
            let mut stdout = io::stdout().lock();
            cli::slug::print_slugs(&config, text, &mut stdout)?;
            Ok(())
        }
    }
}
