//! `post` command: migrate a single file.

use super::migrate::read_post;
use crate::catalog::CategoryCatalog;
use crate::config::MigrateConfig;
use crate::{debug, log};
use crate::pipeline::{Outcome, PostTransformer, TransformOptions};
use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

/// Migrate `file` and write the result to `output`, or to `out` when no
/// output path is given. Deleted posts write nothing.
pub fn migrate_post(
    config: &MigrateConfig,
    file: &Path,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = CategoryCatalog::load(&config.paths.categories)?;
    let post = read_post(file)?;
    let transformer = PostTransformer::new(TransformOptions::from_config(config));

    let (post, stats) = match transformer.transform(post, &catalog) {
        Outcome::Transformed(post, stats) => (post, stats),
        Outcome::Skipped => {
            log!("skip"; "{} is marked deleted, nothing written", file.display());
            return Ok(());
        }
    };

    let xml = post
        .to_xml()
        .with_context(|| format!("Failed to serialize {}", file.display()))?;
    match output {
        Some(path) => {
            fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))?;
            log!("migrate"; "{} -> {}", file.display(), path.display());
        }
        None => out.write_all(xml.as_bytes())?,
    }

    debug!("stats"; "{:?}", stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn setup(post: &str) -> (tempfile::TempDir, MigrateConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("post.xml"), post).unwrap();
        fs::write(
            dir.path().join("categories.xml"),
            r#"<categories><category id="7">News</category></categories>"#,
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.paths.normalize(dir.path());
        (dir, config)
    }

    #[test]
    fn test_post_to_writer() {
        let (dir, config) = setup("<post><slug>Big News</slug><category>7</category></post>");
        let mut out = Vec::new();
        migrate_post(&config, &dir.path().join("post.xml"), None, &mut out).unwrap();

        let xml = String::from_utf8(out).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<slug>big-news</slug>"));
        assert!(xml.contains("<category>News</category>"));
    }

    #[test]
    fn test_post_to_file() {
        let (dir, config) = setup("<post><slug>A B</slug></post>");
        let dest = dir.path().join("out.xml");
        let mut out = Vec::new();
        migrate_post(&config, &dir.path().join("post.xml"), Some(&dest), &mut out).unwrap();

        assert!(out.is_empty());
        assert!(fs::read_to_string(dest).unwrap().contains("<slug>a-b</slug>"));
    }

    #[test]
    fn test_deleted_post_writes_nothing() {
        let (dir, config) = setup("<post><isdeleted>True</isdeleted></post>");
        let dest = dir.path().join("out.xml");
        let mut out = Vec::new();
        migrate_post(&config, &dir.path().join("post.xml"), Some(&dest), &mut out).unwrap();

        assert!(out.is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn test_malformed_post_fails() {
        let (dir, config) = setup("<post><slug></post>");
        let mut out = Vec::new();
        let err = migrate_post(&config, &dir.path().join("post.xml"), None, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
    }
}
