//! Tracking pixel removal.

use super::ContentRewrite;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// An `<img ... />` tag whose `src` points at `aggbug.ashx`.
static RE_AGGBUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\s[^>]*?src=[^>]*?aggbug\.ashx[^>]*/>").unwrap());

/// Strips `aggbug.ashx` view-counter images.
pub struct TrackingPixels;

impl ContentRewrite for TrackingPixels {
    fn name(&self) -> &'static str {
        "aggbug"
    }

    fn rewrite<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        let count = RE_AGGBUG.find_iter(content).count();
        (RE_AGGBUG.replace_all(content, ""), count)
    }
}
