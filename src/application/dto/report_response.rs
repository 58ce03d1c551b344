use super::ReportEnvelope;
use crate::dependency_report::domain::ReportDocument;
use crate::ports::outbound::PersistOutcome;

/// ReportResponse - response DTO from the dependency report use case
///
/// The envelope is what callers receive. The document and persistence
/// outcome are kept for adapters and tests that want to inspect them.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub envelope: ReportEnvelope,
    pub document: ReportDocument,
    /// Outcome of the side-channel write. Never affects the envelope.
    pub persist_outcome: PersistOutcome,
}

impl ReportResponse {
    pub fn new(
        envelope: ReportEnvelope,
        document: ReportDocument,
        persist_outcome: PersistOutcome,
    ) -> Self {
        Self {
            envelope,
            document,
            persist_outcome,
        }
    }
}
