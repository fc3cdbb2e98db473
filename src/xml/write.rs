//! Tree serialization with `quick_xml::Writer`.

use super::{Element, Node, XmlError};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt::Display;
use std::io::Cursor;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn write_failed(err: impl Display) -> XmlError {
    XmlError::Write(err.to_string())
}

/// Serialize `root` behind an XML declaration.
pub(super) fn write_document(root: &Element) -> Result<String, XmlError> {
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(4096)));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(write_failed)?;
    write_newline(&mut writer)?;
    write_element(root, &mut writer)?;
    write_newline(&mut writer)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(write_failed)
}

fn write_newline(writer: &mut XmlWriter) -> Result<(), XmlError> {
    writer
        .write_event(Event::Text(BytesText::from_escaped("\n")))
        .map_err(write_failed)
}

fn write_element(elem: &Element, writer: &mut XmlWriter) -> Result<(), XmlError> {
    let mut start = BytesStart::new(elem.name.as_str());
    for (key, value) in &elem.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if elem.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_failed);
    }

    writer.write_event(Event::Start(start)).map_err(write_failed)?;
    for child in &elem.children {
        let event = match child {
            Node::Element(child) => {
                write_element(child, writer)?;
                continue;
            }
            Node::Text(text) => Event::Text(BytesText::new(text)),
            Node::CData(text) => Event::CData(BytesCData::new(text.as_str())),
            // Comment bodies are written verbatim
            Node::Comment(text) => Event::Comment(BytesText::from_escaped(text.as_str())),
        };
        writer.write_event(event).map_err(write_failed)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(elem.name.as_str())))
        .map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Document;

    #[test]
    fn test_write_escapes_text_and_attributes() {
        let mut elem = Element::new("comment");
        elem.attributes.push(("author".into(), r#"a "b" & c"#.into()));
        elem.set_text("<p>x & y</p>");

        let xml = write_document(&elem).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(xml.contains(r#"author="a &quot;b&quot; &amp; c""#));
        assert!(xml.contains("&lt;p&gt;x &amp; y&lt;/p&gt;"));
        assert!(xml.ends_with("</comment>\n"));
    }

    #[test]
    fn test_write_self_closes_empty_elements() {
        let xml = write_document(&Element::new("tags")).unwrap();
        assert!(xml.contains("<tags/>"));
        assert!(!xml.contains("</tags>"));
    }

    #[test]
    fn test_write_keeps_comment_and_cdata_raw() {
        let doc = Document::parse("<a><!-- x & y --><![CDATA[<b>]]></a>").unwrap();
        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("<!-- x & y -->"));
        assert!(xml.contains("<![CDATA[<b>]]>"));
    }

    #[test]
    fn test_write_reparses_to_same_tree() {
        let source = "<post>\n  <content>&lt;b&gt;hi&lt;/b&gt;</content>\n  <!-- note --><raw><![CDATA[a<b]]></raw>\n</post>";
        let doc = Document::parse(source).unwrap();
        let reparsed = Document::parse(&doc.to_xml().unwrap()).unwrap();
        assert_eq!(doc, reparsed);
    }
}
