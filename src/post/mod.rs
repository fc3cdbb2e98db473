//! Typed view over an exported post document.
//!
//! | Field      | Location                | Missing means          |
//! |------------|-------------------------|------------------------|
//! | deleted    | `post/isdeleted`        | not deleted            |
//! | slug       | first `slug` anywhere   | slug step is a no-op   |
//! | content    | `post/content`          | rewrites are no-ops    |
//! | comments   | every `comment`         | nothing to prune       |
//! | categories | every `category`        | nothing to resolve     |

mod flag;

pub use flag::{CommentFlags, Flag};

use crate::xml::{Document, Element, XmlError};

const DELETED_PATH: &str = "post/isdeleted";
const CONTENT_PATH: &str = "post/content";
const SLUG: &str = "slug";
const COMMENT: &str = "comment";
const CATEGORY: &str = "category";

/// An exported post, owned for the duration of one migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    doc: Document,
}

impl Post {
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        Document::parse(xml).map(Self::from_document)
    }

    pub const fn from_document(doc: Document) -> Self {
        Self { doc }
    }

    #[cfg(test)]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn to_xml(&self) -> Result<String, XmlError> {
        self.doc.to_xml()
    }

    /// `post/isdeleted` is exactly `True`.
    pub fn is_deleted(&self) -> bool {
        let flag = Flag::parse(self.doc.select(DELETED_PATH).map(|e| e.text()).as_deref());
        flag.unwrap_or(false)
    }

    pub fn slug(&self) -> Option<String> {
        self.doc.find_first(SLUG).map(Element::text)
    }

    /// Replace the slug text. Returns false when the post has no slug.
    pub fn set_slug(&mut self, slug: &str) -> bool {
        self.doc
            .find_first_mut(SLUG)
            .map(|elem| elem.set_text(slug))
            .is_some()
    }

    pub fn content(&self) -> Option<String> {
        self.doc.select(CONTENT_PATH).map(Element::text)
    }

    /// Replace the content text. Returns false when the post has no content.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        self.doc
            .select_mut(CONTENT_PATH)
            .map(|elem| elem.set_text(content))
            .is_some()
    }

    /// Drop every comment whose flags are rejected by `keep`.
    ///
    /// Returns the number of removed comments.
    pub fn retain_comments(&mut self, mut keep: impl FnMut(CommentFlags) -> bool) -> usize {
        self.doc
            .retain(COMMENT, |comment| keep(CommentFlags::of(comment)))
    }

    #[cfg(test)]
    pub fn comment_count(&self) -> usize {
        self.doc.find_all(COMMENT).len()
    }

    #[cfg(test)]
    pub fn categories(&self) -> Vec<String> {
        self.doc.find_all(CATEGORY).into_iter().map(Element::text).collect()
    }

    /// Visit every category reference.
    pub fn for_each_category(&mut self, f: impl FnMut(&mut Element)) {
        self.doc.for_each_mut(CATEGORY, f);
    }
}
