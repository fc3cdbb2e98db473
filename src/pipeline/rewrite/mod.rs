//! Text rewrites over a post's HTML content.
//!
//! Each rewrite maps the content string to a new one and reports how many
//! matches it handled. Nothing matched means the input is borrowed back
//! unchanged, so the caller can skip writing the field.
//!
//! # Modules
//!
//! - `files`: legacy `file.axd` / `image.axd` links → canonical file paths
//! - `code`: Courier New font/span wrappers → `<code>`
//! - `teaser`: `<p>[more]</p>` → `<!--more-->`
//! - `aggbug`: strips `aggbug.ashx` tracking images

mod aggbug;
mod code;
mod files;
mod teaser;

pub use aggbug::TrackingPixels;
pub use code::CodeSpans;
pub use files::FileLinks;
pub use teaser::TeaserMarker;

use std::borrow::Cow;

/// A single content rewrite.
pub trait ContentRewrite {
    /// Short name used in debug output.
    fn name(&self) -> &'static str;

    /// Rewrite `content`, returning the result and the number of matches.
    fn rewrite<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize);
}

/// Replace every occurrence of each `(from, to)` pair, in order.
///
/// Pairs are collected before any replacement happens, and each one replaces
/// all copies of its exact text, so a URL used twice is rewritten twice.
fn replace_all_pairs<'a>(content: &'a str, pairs: &[(String, String)]) -> Cow<'a, str> {
    if pairs.is_empty() {
        return Cow::Borrowed(content);
    }

    let mut out = content.to_string();
    for (from, to) in pairs {
        out = out.replace(from.as_str(), to);
    }
    Cow::Owned(out)
}
