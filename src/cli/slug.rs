//! `slug` command.

use crate::config::MigrateConfig;
use crate::utils::slug::format_slug;
use std::io::{self, Write};

/// Print one normalized slug per input line.
pub fn print_slugs(config: &MigrateConfig, inputs: &[String], out: &mut impl Write) -> io::Result<()> {
    for input in inputs {
        writeln!(out, "{}", format_slug(input, &config.slug))?;
    }
    Ok(())
}
