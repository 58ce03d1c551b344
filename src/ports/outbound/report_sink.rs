use std::path::Path;

/// Result of a best-effort persistence attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Written,
    Failed(String),
}

impl PersistOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PersistOutcome::Written)
    }
}

/// ReportSink port for the side-channel copy of the report document
///
/// Persistence is fire-and-forget. Implementations must not panic or return
/// errors; every failure is reported through [`PersistOutcome::Failed`] and
/// callers are free to ignore it.
pub trait ReportSink {
    /// Writes `document` to `destination`, creating parent directories and
    /// overwriting existing content
    fn persist(&self, document: &str, destination: &Path) -> PersistOutcome;
}
