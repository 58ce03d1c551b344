use crate::dependency_report::domain::ReportDocument;

/// DocumentSerializer port for rendering a report document as text
///
/// Serialization is infallible from the caller's point of view: on an
/// internal failure implementations return a minimal valid document that
/// describes the error instead.
pub trait DocumentSerializer {
    fn serialize(&self, document: &ReportDocument) -> String;
}
