//! Event-driven parsing with `quick-xml`.

use super::{Element, Node};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::fmt::Display;
use thiserror::Error;

/// Errors raised while parsing a document.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("document has no root element")]
    MissingRoot,

    #[error("element `<{0}>` is never closed")]
    Unclosed(String),

    #[error("unexpected content outside the root element at byte {0}")]
    OutsideRoot(u64),

    #[error("failed to serialize XML: {0}")]
    Write(String),
}

type XmlReader<'a> = Reader<&'a [u8]>;

fn malformed(reader: &XmlReader<'_>, err: impl Display) -> XmlError {
    XmlError::Malformed {
        position: reader.buffer_position() as u64,
        message: err.to_string(),
    }
}

/// Parse `input` into its root element.
pub(super) fn parse_root(input: &str) -> Result<Element, XmlError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = Reader::from_str(input);
    let mut tree = TreeBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| malformed(&reader, e))?;
        match event {
            Event::Start(start) => tree.open(read_element(&start, &reader)?),
            Event::Empty(start) => {
                let elem = read_element(&start, &reader)?;
                tree.attach(Node::Element(elem), &reader)?;
            }
            // quick-xml already rejects mismatched end tags
            Event::End(_) => tree.close(&reader)?,
            Event::Text(text) => {
                let raw = text.decode().map_err(|e| malformed(&reader, e))?;
                let value = unescape(&raw).map_err(|e| malformed(&reader, e))?;
                tree.text(&value, &reader)?;
            }
            Event::GeneralRef(reference) => {
                let name = reference.decode().map_err(|e| malformed(&reader, e))?;
                let entity = format!("&{name};");
                let value = unescape(&entity).map_err(|e| malformed(&reader, e))?;
                tree.text(&value, &reader)?;
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                tree.attach(Node::CData(value), &reader)?;
            }
            Event::Comment(comment) => {
                let value = String::from_utf8_lossy(&comment.into_inner()).into_owned();
                if tree.is_open() {
                    tree.attach(Node::Comment(value), &reader)?;
                }
            }
            Event::Eof => break,
            // Declaration, processing instructions and doctype are not kept
            _ => {}
        }
    }

    tree.finish()
}

fn read_element(start: &BytesStart<'_>, reader: &XmlReader<'_>) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| malformed(reader, e))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(reader, e))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| malformed(reader, e))?;
        let raw = std::str::from_utf8(&attr.value).map_err(|e| malformed(reader, e))?;
        let value = unescape(raw).map_err(|e| malformed(reader, e))?;
        attributes.push((key.to_string(), value.into_owned()));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

// ============================================================================
// Tree Builder
// ============================================================================

/// Stack of open elements plus the finished root.
#[derive(Default)]
struct TreeBuilder {
    open: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    fn open(&mut self, elem: Element) {
        self.open.push(elem);
    }

    fn close(&mut self, reader: &XmlReader<'_>) -> Result<(), XmlError> {
        let elem = self
            .open
            .pop()
            .ok_or_else(|| malformed(reader, "end tag without a matching start tag"))?;
        self.attach(Node::Element(elem), reader)
    }

    fn attach(&mut self, node: Node, reader: &XmlReader<'_>) -> Result<(), XmlError> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }

        match node {
            Node::Element(elem) if self.root.is_none() => {
                self.root = Some(elem);
                Ok(())
            }
            _ => Err(XmlError::OutsideRoot(reader.buffer_position() as u64)),
        }
    }

    /// Append text, merging with a preceding text node.
    ///
    /// Entity references arrive as separate events, so `a &amp; b` is three
    /// pieces that end up in one node.
    fn text(&mut self, value: &str, reader: &XmlReader<'_>) -> Result<(), XmlError> {
        let Some(parent) = self.open.last_mut() else {
            if value.trim().is_empty() {
                return Ok(());
            }
            return Err(XmlError::OutsideRoot(reader.buffer_position() as u64));
        };

        if let Some(Node::Text(last)) = parent.children.last_mut() {
            last.push_str(value);
        } else {
            parent.children.push(Node::Text(value.to_string()));
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Element, XmlError> {
        if let Some(unclosed) = self.open.pop() {
            return Err(XmlError::Unclosed(unclosed.name));
        }
        self.root.ok_or(XmlError::MissingRoot)
    }
}
