//! Minimal owned XML tree.
//!
//! Post exports are small, so the whole file is parsed into an owned tree,
//! rewritten in memory and serialized back out. Only the operations the
//! migration needs are provided:
//!
//! - [`Document::select`] / [`Document::select_mut`]: slash paths from the root (`post/content`)
//! - [`Document::find_first_mut`], [`Document::find_all`], [`Document::for_each_mut`]: descendant search (`//slug`)
//! - [`Document::retain`]: filter descendants by swapping each parent's child list
//!
//! Parsing is done with `quick-xml` (see [`parse`]); serialization in [`write`].

mod parse;
mod write;

pub use parse::XmlError;

/// A node inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Decoded character data.
    Text(String),
    CData(String),
    Comment(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            _ => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            _ => None,
        })
    }

    /// First direct child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|elem| elem.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements_mut().find(|elem| elem.name == name)
    }

    /// Concatenated text of all descendant text and CDATA nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) | Node::CData(text) => out.push_str(text),
                Node::Element(elem) => elem.collect_text(out),
                Node::Comment(_) => {}
            }
        }
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    fn find_first(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.elements().find_map(|elem| elem.find_first(name))
    }

    fn find_first_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name == name {
            return Some(self);
        }
        self.elements_mut().find_map(|elem| elem.find_first_mut(name))
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        if self.name == name {
            out.push(self);
        }
        for elem in self.elements() {
            elem.collect_named(name, out);
        }
    }

    fn visit_mut(&mut self, name: &str, f: &mut dyn FnMut(&mut Element)) {
        if self.name == name {
            f(self);
        }
        for elem in self.elements_mut() {
            elem.visit_mut(name, f);
        }
    }

    /// Rebuild the child list without rejected `name` elements, then recurse
    /// into what was kept. Returns the number of removed elements.
    fn retain_named(&mut self, name: &str, keep: &mut dyn FnMut(&Element) -> bool) -> usize {
        let mut removed = 0;
        let children = std::mem::take(&mut self.children);
        let mut retained: Vec<Node> = Vec::with_capacity(children.len());

        for node in children {
            match node {
                Node::Element(elem) if elem.name == name && !keep(&elem) => {
                    removed += 1;
                    // Drop the indentation in front of the removed element
                    if matches!(retained.last(), Some(Node::Text(t)) if t.trim().is_empty()) {
                        retained.pop();
                    }
                }
                other => retained.push(other),
            }
        }

        for node in &mut retained {
            if let Node::Element(elem) = node {
                removed += elem.retain_named(name, keep);
            }
        }

        self.children = retained;
        removed
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Parse a document from a string.
    ///
    /// Fails on malformed markup, a missing root element, or unclosed tags.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        parse::parse_root(input).map(|root| Self { root })
    }

    /// Serialize the document, including an XML declaration.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        write::write_document(&self.root)
    }

    /// Resolve a slash path starting at the root element.
    ///
    /// `post/content` matches the first `content` child of a `post` root.
    pub fn select(&self, path: &str) -> Option<&Element> {
        let mut segments = path.split('/');
        if segments.next()? != self.root.name {
            return None;
        }
        segments.try_fold(&self.root, |elem, name| elem.child(name))
    }

    pub fn select_mut(&mut self, path: &str) -> Option<&mut Element> {
        let mut segments = path.split('/');
        if segments.next()? != self.root.name {
            return None;
        }
        segments.try_fold(&mut self.root, |elem, name| elem.child_mut(name))
    }

    /// First element named `name` anywhere in the document (`//name`).
    pub fn find_first(&self, name: &str) -> Option<&Element> {
        self.root.find_first(name)
    }

    pub fn find_first_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.root.find_first_mut(name)
    }

    /// All elements named `name`, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.collect_named(name, &mut out);
        out
    }

    /// Call `f` on every element named `name`, in document order.
    pub fn for_each_mut(&mut self, name: &str, mut f: impl FnMut(&mut Element)) {
        self.root.visit_mut(name, &mut f);
    }

    /// Remove every descendant named `name` for which `keep` returns false.
    ///
    /// The kept set of each parent is computed before its child list is
    /// replaced, so removal order cannot affect the result. The root element
    /// itself is never removed. Returns the number of removed elements.
    pub fn retain(&mut self, name: &str, mut keep: impl FnMut(&Element) -> bool) -> usize {
        self.root.retain_named(name, &mut keep)
    }
}
