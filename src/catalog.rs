//! Category id → name lookup.
//!
//! The export stores categories separately:
//!
//! ```xml
//! <categories>
//!   <category id="1">General</category>
//!   <category id="2">Rust</category>
//! </categories>
//! ```
//!
//! Posts reference them by id; migration replaces each id with its name.

use crate::xml::{Document, XmlError};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::{fs, path::Path};

/// Read-only category catalog, immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    names: FxHashMap<String, String>,
}

impl CategoryCatalog {
    /// Collect every `category` element carrying an `id` attribute.
    ///
    /// When an id appears twice the first entry wins.
    pub fn from_document(doc: &Document) -> Self {
        let mut names = FxHashMap::default();
        for category in doc.find_all("category") {
            if let Some(id) = category.attr("id") {
                names
                    .entry(id.to_string())
                    .or_insert_with(|| category.text());
            }
        }
        Self { names }
    }

    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        Document::parse(xml).map(|doc| Self::from_document(&doc))
    }

    /// Load and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read categories from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse categories from {}", path.display()))
    }

    /// Display name for `id`, if the catalog knows it.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
