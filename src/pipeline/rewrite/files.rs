//! Legacy file handler links.
//!
//! ```text
//! href="http://blog/file.axd?file=report.pdf"   → href="/posts/files/report.pdf"
//! src="/image.axd?picture=2010/01/cat.png"      → src="/posts/files/2010/01/cat.png"
//! ```

use super::{ContentRewrite, replace_all_pairs};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Group 2: the whole URL. Group 6: the file name.
static RE_FILE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(href|src)="(([^"]+)?(file|image)\.axd\?(file|picture)=([^"]+))""#)
        .unwrap()
});

/// Rewrites `file.axd?file=` and `image.axd?picture=` URLs to `prefix + name`.
pub struct FileLinks<'a> {
    prefix: &'a str,
}

impl<'a> FileLinks<'a> {
    pub const fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }
}

impl ContentRewrite for FileLinks<'_> {
    fn name(&self) -> &'static str {
        "files"
    }

    fn rewrite<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        let pairs: Vec<(String, String)> = RE_FILE_LINK
            .captures_iter(content)
            .filter_map(|caps| {
                let url = caps.get(2)?.as_str();
                let file = caps.get(6)?.as_str();
                Some((url.to_string(), format!("{}{}", self.prefix, file)))
            })
            .collect();

        (replace_all_pairs(content, &pairs), pairs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/posts/files/";

    fn rewrite(content: &str) -> (String, usize) {
        let (out, count) = FileLinks::new(PREFIX).rewrite(content);
        (out.into_owned(), count)
    }

    #[test]
    fn test_relative_file_link() {
        let (out, count) = rewrite(r#"<a href="file.axd?file=report.pdf">r</a>"#);
        assert_eq!(out, r#"<a href="/posts/files/report.pdf">r</a>"#);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_absolute_image_link() {
        let (out, _) = rewrite(
            r#"<img src="http://blog.example.com/image.axd?picture=2010%2f01%2fcat.png" alt="" />"#,
        );
        assert_eq!(out, r#"<img src="/posts/files/2010%2f01%2fcat.png" alt="" />"#);
    }

    #[test]
    fn test_case_insensitive() {
        let (out, count) = rewrite(r#"<A HREF="/blog/FILE.AXD?FILE=Doc.PDF">x</A>"#);
        assert_eq!(out, r#"<A HREF="/posts/files/Doc.PDF">x</A>"#);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_duplicate_urls_all_rewritten() {
        let content = r#"<a href="file.axd?file=a.zip">1</a><a href="file.axd?file=a.zip">2</a>"#;
        let (out, _) = rewrite(content);
        assert_eq!(out.matches("/posts/files/a.zip").count(), 2);
        assert!(!out.contains("file.axd"));
    }

    #[test]
    fn test_unrelated_links_untouched() {
        let content = r#"<a href="https://example.com/page?file=x">x</a>"#;
        let (out, count) = FileLinks::new(PREFIX).rewrite(content);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_idempotent() {
        let (once, _) = rewrite(r#"<a href="file.axd?file=a.pdf">a</a>"#);
        let (twice, count) = rewrite(&once);
        assert_eq!(once, twice);
        assert_eq!(count, 0);
    }
}
