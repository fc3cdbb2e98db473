//! Slug normalization.
//!
//! Turns a hand-written slug (`My First Post!`) into a URL-safe token
//! (`my-first-post`). Letters and digits are kept and lowercased; every run of
//! anything else collapses into a single separator, and separators never lead
//! or trail. Formatting is idempotent: `format_slug(format_slug(s)) == format_slug(s)`.

use crate::config::{SlugConfig, SlugMode};
use deunicode::deunicode;
use std::borrow::Cow;

/// Normalize `raw` according to `config`.
///
/// Returns an empty string when nothing slug-worthy remains.
pub fn format_slug(raw: &str, config: &SlugConfig) -> String {
    let separator = config.separator.as_char();
    let source: Cow<'_, str> = match config.mode {
        SlugMode::Full => Cow::Owned(deunicode(raw)),
        SlugMode::Safe => Cow::Borrowed(raw),
    };

    let mut slug = String::with_capacity(source.len());
    let mut pending_separator = false;

    for ch in source.chars() {
        if !is_slug_char(ch, config.mode) {
            pending_separator = true;
            continue;
        }

        if pending_separator && !slug.is_empty() && !slug.ends_with(separator) {
            slug.push(separator);
        }
        pending_separator = false;

        // Some lowercase mappings expand into combining marks; drop those
        slug.extend(ch.to_lowercase().filter(|&c| is_slug_char(c, config.mode)));
    }

    let trimmed_len = slug.trim_end_matches(separator).len();
    slug.truncate(trimmed_len);
    slug
}

#[inline]
fn is_slug_char(ch: char, mode: SlugMode) -> bool {
    match mode {
        SlugMode::Full => ch.is_ascii_alphanumeric(),
        SlugMode::Safe => ch.is_alphanumeric(),
    }
}
