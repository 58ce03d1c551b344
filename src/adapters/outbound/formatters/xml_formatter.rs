use crate::dependency_report::domain::ReportDocument;
use crate::ports::outbound::DocumentSerializer;
use crate::shared::Result;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

const ROOT_ELEMENT: &str = "root";
const FILE_ELEMENT: &str = "file";
const DEPENDENCY_ELEMENT: &str = "dependency";
const PATH_ATTRIBUTE: &str = "path";
const BACKWARD_ATTRIBUTE: &str = "isBackward";

/// XML declaration shared by regular and error documents
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Stands in for characters XML 1.0 cannot represent at all
const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// XmlDocumentFormatter adapter rendering a ReportDocument as XML
///
/// This adapter implements the DocumentSerializer port. Paths are written as
/// fully escaped attribute values: markup characters become entities, tab,
/// line feed and carriage return become character references so parsers do
/// not normalize them away, and characters illegal in XML 1.0 are replaced
/// with U+FFFD.
pub struct XmlDocumentFormatter;

impl XmlDocumentFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the document into `out`, falling back to an error document
    fn render<W>(document: &ReportDocument, out: W) -> String
    where
        W: Write + Into<Vec<u8>>,
    {
        let rendered = Self::write_document(document, out)
            .and_then(|out| Ok(String::from_utf8(out.into())?));

        match rendered {
            Ok(xml) => xml,
            Err(e) => {
                tracing::warn!("Failed to generate dependency XML: {}", e);
                Self::error_document(&format!("Failed to generate dependency XML: {}", e))
            }
        }
    }

    fn write_document<W: Write>(document: &ReportDocument, out: W) -> Result<W> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new(ROOT_ELEMENT);
        root.push_attribute((
            BACKWARD_ATTRIBUTE,
            if document.is_backward() { "true" } else { "false" },
        ));

        if document.is_empty() {
            writer.write_event(Event::Empty(root))?;
            return Ok(writer.into_inner());
        }

        writer.write_event(Event::Start(root))?;
        for file in document.files() {
            let mut file_start = BytesStart::new(FILE_ELEMENT);
            file_start.push_attribute(path_attribute(file.path()));

            if file.dependencies().is_empty() {
                writer.write_event(Event::Empty(file_start))?;
                continue;
            }

            writer.write_event(Event::Start(file_start))?;
            for dependency in file.dependencies() {
                let mut dependency_node = BytesStart::new(DEPENDENCY_ELEMENT);
                dependency_node.push_attribute(path_attribute(dependency));
                writer.write_event(Event::Empty(dependency_node))?;
            }
            writer.write_event(Event::End(BytesEnd::new(FILE_ELEMENT)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

        Ok(writer.into_inner())
    }

    /// Minimal valid document carrying a human-readable error message
    fn error_document(message: &str) -> String {
        format!(
            "{}\n<error>{}</error>",
            XML_DECLARATION,
            escape(&replace_illegal_chars(message))
        )
    }
}

/// Builds a `path="..."` attribute from an already escaped value
fn path_attribute(path: &str) -> Attribute<'static> {
    Attribute {
        key: QName(PATH_ATTRIBUTE.as_bytes()),
        value: Cow::Owned(escape_attribute_value(path).into_bytes()),
    }
}

fn escape_attribute_value(value: &str) -> String {
    let sanitized = replace_illegal_chars(value);
    let mut escaped = String::with_capacity(sanitized.len());
    for c in escape(&sanitized).chars() {
        match c {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Replaces characters outside the XML 1.0 `Char` production
fn replace_illegal_chars(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .chars()
            .map(|c| if is_xml_char(c) { c } else { REPLACEMENT_CHARACTER })
            .collect(),
    )
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

impl Default for XmlDocumentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSerializer for XmlDocumentFormatter {
    fn serialize(&self, document: &ReportDocument) -> String {
        Self::render(document, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_report::domain::FileNode;
    use quick_xml::events::Event as ReadEvent;
    use quick_xml::reader::Reader;
    use std::io;

    fn file(path: &str, deps: &[&str]) -> FileNode {
        FileNode::new(
            path.to_string(),
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    /// Parses the XML and returns (element name, path attribute) pairs in order
    fn parse_nodes(xml: &str) -> Vec<(String, Option<String>)> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut nodes = Vec::new();

        loop {
            match reader.read_event().unwrap() {
                ReadEvent::Start(e) | ReadEvent::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                    let path = e
                        .attributes()
                        .map(|a| a.unwrap())
                        .find(|a| a.key.as_ref() == PATH_ATTRIBUTE.as_bytes())
                        .map(|a| a.unescape_value().unwrap().into_owned());
                    nodes.push((name, path));
                }
                ReadEvent::Eof => break,
                _ => {}
            }
        }
        nodes
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl From<FailingWriter> for Vec<u8> {
        fn from(_: FailingWriter) -> Self {
            Vec::new()
        }
    }

    #[test]
    fn test_serialize_basic() {
        let doc = ReportDocument::forward(vec![file(
            "/proj/A.kt",
            &["/proj/B.kt", "/proj/C.kt"],
        )]);

        let xml = XmlDocumentFormatter::new().serialize(&doc);

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(r#"<root isBackward="false">"#));
        assert!(xml.contains(r#"<file path="/proj/A.kt">"#));
        assert!(xml.contains(r#"<dependency path="/proj/B.kt"/>"#));
        assert!(xml.contains("</root>"));

        assert_eq!(
            parse_nodes(&xml),
            vec![
                ("root".to_string(), None),
                ("file".to_string(), Some("/proj/A.kt".to_string())),
                ("dependency".to_string(), Some("/proj/B.kt".to_string())),
                ("dependency".to_string(), Some("/proj/C.kt".to_string())),
            ]
        );
    }

    #[test]
    fn test_serialize_empty_document() {
        let xml = XmlDocumentFormatter::new().serialize(&ReportDocument::forward(vec![]));
        assert!(xml.contains(r#"<root isBackward="false"/>"#));
        assert_eq!(parse_nodes(&xml), vec![("root".to_string(), None)]);
    }

    #[test]
    fn test_serialize_file_without_dependencies() {
        let doc = ReportDocument::forward(vec![file("/proj/Leaf.kt", &[])]);
        let xml = XmlDocumentFormatter::new().serialize(&doc);
        assert!(xml.contains(r#"<file path="/proj/Leaf.kt"/>"#));
    }

    #[test]
    fn test_serialize_escapes_attribute_values() {
        let doc = ReportDocument::forward(vec![file(
            "/proj/we\"ird & <odd>.kt",
            &["/proj/it's.kt"],
        )]);

        let xml = XmlDocumentFormatter::new().serialize(&doc);

        assert!(xml.contains("&quot;"));
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;odd&gt;"));
        assert!(!xml.contains("we\"ird"));

        let nodes = parse_nodes(&xml);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1].1.as_deref(), Some("/proj/we\"ird & <odd>.kt"));
        assert_eq!(nodes[2].1.as_deref(), Some("/proj/it's.kt"));
    }

    #[test]
    fn test_serialize_whitespace_in_paths_round_trips() {
        let doc = ReportDocument::forward(vec![file("/proj/a\nb.kt", &["/proj/c\td\r.kt"])]);

        let xml = XmlDocumentFormatter::new().serialize(&doc);

        assert!(xml.contains(r#"path="/proj/a&#10;b.kt""#));
        assert!(xml.contains(r#"path="/proj/c&#9;d&#13;.kt""#));
        let nodes = parse_nodes(&xml);
        assert_eq!(nodes[1].1.as_deref(), Some("/proj/a\nb.kt"));
        assert_eq!(nodes[2].1.as_deref(), Some("/proj/c\td\r.kt"));
    }

    #[test]
    fn test_serialize_replaces_characters_illegal_in_xml() {
        let doc = ReportDocument::forward(vec![file(
            "/proj/a\u{1}b.kt",
            &["/proj/c\u{1f}\u{FFFE}.kt"],
        )]);

        let xml = XmlDocumentFormatter::new().serialize(&doc);

        assert!(xml.chars().all(is_xml_char));
        let nodes = parse_nodes(&xml);
        assert_eq!(nodes[1].1.as_deref(), Some("/proj/a\u{FFFD}b.kt"));
        assert_eq!(nodes[2].1.as_deref(), Some("/proj/c\u{FFFD}\u{FFFD}.kt"));
    }

    #[test]
    fn test_is_xml_char() {
        assert!(is_xml_char('a'));
        assert!(is_xml_char('\t'));
        assert!(is_xml_char('\u{10FFFF}'));
        assert!(!is_xml_char('\u{0}'));
        assert!(!is_xml_char('\u{B}'));
        assert!(!is_xml_char('\u{FFFF}'));
    }

    #[test]
    fn test_serialize_is_byte_identical_across_calls() {
        let doc = ReportDocument::forward(vec![
            file("/a.kt", &["/b.kt"]),
            file("/b.kt", &["/a.kt"]),
        ]);
        let formatter = XmlDocumentFormatter::new();
        assert_eq!(formatter.serialize(&doc), formatter.serialize(&doc));
    }

    #[test]
    fn test_render_failure_returns_error_document() {
        let doc = ReportDocument::forward(vec![file("/a.kt", &[])]);

        let xml = XmlDocumentFormatter::render(&doc, FailingWriter);

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<error>Failed to generate dependency XML"));
        assert_eq!(parse_nodes(&xml), vec![("error".to_string(), None)]);
    }

    #[test]
    fn test_error_document_escapes_message() {
        let xml = XmlDocumentFormatter::error_document("bad <path> & \"stuff\"");
        assert!(xml.contains("bad &lt;path&gt; &amp; &quot;stuff&quot;"));
        assert_eq!(parse_nodes(&xml), vec![("error".to_string(), None)]);
    }

    #[test]
    fn test_error_document_replaces_illegal_characters() {
        let xml = XmlDocumentFormatter::error_document("bad\u{0}path");
        assert!(xml.contains("<error>bad\u{FFFD}path</error>"));
        assert!(xml.chars().all(is_xml_char));
    }
}
