//! `migrate` command: run every post in a directory through the pipeline.
//!
//! Posts are processed one at a time, in file-name order. The category
//! catalog is loaded once up front. A post that fails to read or parse is
//! logged and counted, and the batch continues unless `--fail-fast` is set.

use crate::catalog::CategoryCatalog;
use crate::config::MigrateConfig;
use crate::logger::ProgressLine;
use crate::pipeline::{Outcome, PostTransformer, TransformOptions, TransformStats};
use crate::post::Post;
use crate::{debug, log};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// What happened to a single file.
#[derive(Debug)]
pub enum FileOutcome {
    Written(PathBuf, TransformStats),
    Skipped,
}

/// Totals for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrateSummary {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl MigrateSummary {
    pub const fn total(&self) -> usize {
        self.migrated + self.skipped + self.failed
    }
}

/// Migrate the whole posts directory configured in `config`.
pub fn migrate_all(config: &MigrateConfig, fail_fast: bool) -> Result<MigrateSummary> {
    let paths = &config.paths;

    let catalog = CategoryCatalog::load(&paths.categories)?;
    if catalog.is_empty() {
        log!("warning"; "no categories in {}, ids are kept as-is", paths.categories.display());
    } else {
        debug!("catalog"; "{} categories from {}", catalog.len(), paths.categories.display());
    }

    let files = collect_post_files(&paths.posts)?;
    if files.is_empty() {
        log!("migrate"; "no post files in {}", paths.posts.display());
        return Ok(MigrateSummary::default());
    }

    fs::create_dir_all(&paths.output)
        .with_context(|| format!("Failed to create output directory {}", paths.output.display()))?;

    let transformer = PostTransformer::new(TransformOptions::from_config(config));
    let mut summary = MigrateSummary::default();
    let mut progress = ProgressLine::new("posts", files.len());

    for path in &files {
        match migrate_file(path, &paths.output, &transformer, &catalog) {
            Ok(FileOutcome::Written(dest, stats)) => {
                summary.migrated += 1;
                debug!("migrate"; "{} -> {} {:?}", display_name(path), dest.display(), stats);
            }
            Ok(FileOutcome::Skipped) => {
                summary.skipped += 1;
                debug!("skip"; "{} is deleted", display_name(path));
            }
            Err(e) if fail_fast => return Err(e),
            Err(e) => {
                summary.failed += 1;
                log!("error"; "{:#}", e);
            }
        }
        progress.inc();
    }
    progress.finish();

    log!(
        "done";
        "{} migrated, {} skipped, {} failed",
        summary.migrated,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

/// Migrate one post file into `output_dir`, keeping its file name.
///
/// Deleted posts produce no file.
pub fn migrate_file(
    path: &Path,
    output_dir: &Path,
    transformer: &PostTransformer,
    catalog: &CategoryCatalog,
) -> Result<FileOutcome> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid post path {}", path.display()))?;

    let post = read_post(path)?;
    match transformer.transform(post, catalog) {
        Outcome::Skipped => Ok(FileOutcome::Skipped),
        Outcome::Transformed(post, stats) => {
            let dest = output_dir.join(file_name);
            let xml = post
                .to_xml()
                .with_context(|| format!("Failed to serialize {}", path.display()))?;
            fs::write(&dest, xml).with_context(|| format!("Failed to write {}", dest.display()))?;
            Ok(FileOutcome::Written(dest, stats))
        }
    }
}

/// Read and parse a post file.
pub fn read_post(path: &Path) -> Result<Post> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Post::parse(&source).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Collect `*.xml` files directly inside `dir`, sorted by name.
fn collect_post_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read posts directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();

    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
