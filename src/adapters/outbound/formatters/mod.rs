/// Formatter adapters for rendering report documents
mod xml_formatter;

pub use xml_formatter::XmlDocumentFormatter;
