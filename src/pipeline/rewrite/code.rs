//! Inline code markup.
//!
//! The old editor marked inline code with a Courier New font. Three shapes
//! show up in exports:
//!
//! ```text
//! <font face="Courier New">x</font>
//! <span style="font-family: Courier New;">x</span>
//! <span style="font-family: Courier New, courier;">x</span>
//! ```
//!
//! All become `<code>x</code>`. The captured text cannot contain `<`, so a
//! match always stops at the first closing tag.

use super::{ContentRewrite, replace_all_pairs};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static RE_CODE: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r#"(?i)(?P<all><font face="Courier New">(?P<code>[^<]+)</font>)"#,
        r#"(?i)(?P<all><span style="font-family:\s*Courier New;*">(?P<code>[^<]+)</span>)"#,
        r#"(?i)(?P<all><span style="font-family:\s*Courier New,\s*courier;*">(?P<code>[^<]+)</span>)"#,
    ]
    .map(|pattern| Regex::new(pattern).unwrap())
});

/// Converts fixed-width font wrappers into `<code>` elements.
pub struct CodeSpans;

impl CodeSpans {
    fn rewrite_with<'a>(regex: &Regex, content: Cow<'a, str>) -> (Cow<'a, str>, usize) {
        let pairs: Vec<(String, String)> = regex
            .captures_iter(&content)
            .filter_map(|caps| {
                let all = caps.name("all")?.as_str();
                let code = caps.name("code")?.as_str();
                Some((all.to_string(), format!("<code>{code}</code>")))
            })
            .collect();

        if pairs.is_empty() {
            return (content, 0);
        }
        let rewritten = replace_all_pairs(&content, &pairs).into_owned();
        (Cow::Owned(rewritten), pairs.len())
    }
}

impl ContentRewrite for CodeSpans {
    fn name(&self) -> &'static str {
        "code"
    }

    fn rewrite<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        RE_CODE
            .iter()
            .fold((Cow::Borrowed(content), 0), |(content, total), regex| {
                let (content, count) = Self::rewrite_with(regex, content);
                (content, total + count)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(content: &str) -> String {
        CodeSpans.rewrite(content).0.into_owned()
    }

    #[test]
    fn test_font_tag() {
        assert_eq!(rewrite(r#"<font face="Courier New">x=1</font>"#), "<code>x=1</code>");
    }

    #[test]
    fn test_span_variants() {
        assert_eq!(
            rewrite(r#"<span style="font-family: Courier New;">foo()</span>"#),
            "<code>foo()</code>"
        );
        assert_eq!(
            rewrite(r#"<span style="font-family:Courier New">bar</span>"#),
            "<code>bar</code>"
        );
        assert_eq!(
            rewrite(r#"<span style="font-family: Courier New, courier;">baz</span>"#),
            "<code>baz</code>"
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(rewrite(r#"<FONT FACE="courier new">X</FONT>"#), "<code>X</code>");
    }

    #[test]
    fn test_nested_markup_not_matched() {
        let content = r#"<font face="Courier New"><b>bold</b></font>"#;
        let (out, count) = CodeSpans.rewrite(content);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_multiple_matches_counted() {
        let content = concat!(
            r#"<p>Use <font face="Courier New">a</font> and "#,
            r#"<span style="font-family: Courier New;">b</span> and "#,
            r#"<font face="Courier New">a</font>.</p>"#,
        );
        let (out, count) = CodeSpans.rewrite(content);
        assert_eq!(out, "<p>Use <code>a</code> and <code>b</code> and <code>a</code>.</p>");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_other_fonts_untouched() {
        let content = r#"<font face="Arial">x</font>"#;
        assert_eq!(rewrite(content), content);
    }
}
