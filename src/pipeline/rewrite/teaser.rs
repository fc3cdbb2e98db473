//! Teaser marker.

use super::ContentRewrite;
use std::borrow::Cow;

const OLD_TEASER_MARKER: &str = "<p>[more]</p>";
const NEW_TEASER_MARKER: &str = "<!--more-->";

/// Replaces the `<p>[more]</p>` paragraph with an inline `<!--more-->` comment.
pub struct TeaserMarker;

impl ContentRewrite for TeaserMarker {
    fn name(&self) -> &'static str {
        "teaser"
    }

    fn rewrite<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        match content.matches(OLD_TEASER_MARKER).count() {
            0 => (Cow::Borrowed(content), 0),
            count => (
                Cow::Owned(content.replace(OLD_TEASER_MARKER, NEW_TEASER_MARKER)),
                count,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_marker_only() {
        let (out, count) = TeaserMarker.rewrite("<p>intro</p><p>[more]</p><p>rest</p>");
        assert_eq!(out, "<p>intro</p><!--more--><p>rest</p>");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_literal_match_only() {
        let content = "<p>[MORE]</p><p> [more] </p>";
        let (out, count) = TeaserMarker.rewrite(content);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(count, 0);
    }
}
