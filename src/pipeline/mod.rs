//! Post migration pipeline.
//!
//! A post goes through a fixed sequence of steps:
//!
//! | # | Step        | Field        | Effect                                      |
//! |---|-------------|--------------|---------------------------------------------|
//! | 1 | slug        | `slug`       | normalized with [`format_slug`]             |
//! | 2 | files       | `content`    | `file.axd` links → `/posts/files/<name>`    |
//! | 3 | code        | `content`    | Courier New wrappers → `<code>`             |
//! | 4 | teaser      | `content`    | `<p>[more]</p>` → `<!--more-->`             |
//! | 5 | aggbug      | `content`    | tracking images removed                     |
//! | 6 | comments    | `comment`    | spam / unapproved / deleted pruned          |
//! | 7 | categories  | `category`   | ids → names from the [`CategoryCatalog`]    |
//!
//! Posts flagged `isdeleted` skip the pipeline entirely and must not be
//! written. Every step is a no-op when its field is missing.

mod rewrite;

pub use rewrite::{CodeSpans, ContentRewrite, FileLinks, TeaserMarker, TrackingPixels};

use crate::catalog::CategoryCatalog;
use crate::config::{CommentsConfig, ContentConfig, MigrateConfig, SlugConfig};
use crate::debug;
use crate::post::Post;
use crate::utils::slug::format_slug;
use std::borrow::Cow;

// =============================================================================
// Options and Results
// =============================================================================

/// Settings the pipeline reads from configuration.
///
/// `TransformOptions::default()` reproduces the stock migration rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub slug: SlugConfig,
    pub content: ContentConfig,
    pub comments: CommentsConfig,
}

impl TransformOptions {
    pub fn from_config(config: &MigrateConfig) -> Self {
        Self {
            slug: config.slug.clone(),
            content: config.content.clone(),
            comments: config.comments,
        }
    }
}

/// Counters describing what a migration changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub links_rewritten: usize,
    pub code_spans: usize,
    pub teaser_markers: usize,
    pub tracking_pixels: usize,
    pub comments_removed: usize,
    pub categories_resolved: usize,
    pub categories_unresolved: usize,
}

/// Result of running a post through the pipeline.
#[derive(Debug)]
pub enum Outcome {
    /// The post was migrated and should be written.
    Transformed(Post, TransformStats),
    /// The post is deleted; nothing must be written.
    Skipped,
}

// =============================================================================
// Transformer
// =============================================================================

/// Applies the migration steps to one post at a time.
///
/// Holds no per-post state, so one transformer serves a whole batch.
#[derive(Debug, Clone, Default)]
pub struct PostTransformer {
    options: TransformOptions,
}

impl PostTransformer {
    pub const fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Migrate `post`, resolving categories against `catalog`.
    pub fn transform(&self, mut post: Post, catalog: &CategoryCatalog) -> Outcome {
        if post.is_deleted() {
            return Outcome::Skipped;
        }

        let mut stats = TransformStats::default();

        self.format_slug(&mut post);

        let files = FileLinks::new(&self.options.content.files_prefix);
        stats.links_rewritten = apply_rewrite(&mut post, &files);
        stats.code_spans = apply_rewrite(&mut post, &CodeSpans);
        stats.teaser_markers = apply_rewrite(&mut post, &TeaserMarker);
        stats.tracking_pixels = apply_rewrite(&mut post, &TrackingPixels);

        stats.comments_removed = self.remove_rejected_comments(&mut post);

        let (resolved, unresolved) = resolve_categories(&mut post, catalog);
        stats.categories_resolved = resolved;
        stats.categories_unresolved = unresolved;

        Outcome::Transformed(post, stats)
    }

    fn format_slug(&self, post: &mut Post) {
        if let Some(slug) = post.slug() {
            let formatted = format_slug(&slug, &self.options.slug);
            if formatted != slug {
                debug!("slug"; "{} -> {}", slug, formatted);
                post.set_slug(&formatted);
            }
        }
    }

    fn remove_rejected_comments(&self, post: &mut Post) -> usize {
        let policy = self.options.comments;
        post.retain_comments(|flags| policy.keeps(flags))
    }
}

/// Run one content rewrite, writing the field back only if it changed.
fn apply_rewrite(post: &mut Post, rewrite: &dyn ContentRewrite) -> usize {
    let Some(content) = post.content() else {
        return 0;
    };

    let (rewritten, count) = rewrite.rewrite(&content);
    if let Cow::Owned(rewritten) = rewritten {
        debug!(rewrite.name(); "{} match(es)", count);
        post.set_content(rewritten);
    }
    count
}

/// Replace category ids with catalog names; unknown ids stay as they are.
fn resolve_categories(post: &mut Post, catalog: &CategoryCatalog) -> (usize, usize) {
    let mut resolved = 0;
    let mut unresolved = 0;

    post.for_each_category(|category| match catalog.resolve(&category.text()) {
        Some(name) => {
            category.set_text(name);
            resolved += 1;
        }
        None => unresolved += 1,
    });

    (resolved, unresolved)
}

// =============================================================================
// Tests
// =============================================================================
