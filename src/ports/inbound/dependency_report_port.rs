use crate::application::dto::{ReportRequest, ReportResponse};
use crate::shared::Result;

/// DependencyReportPort - Inbound port for the dependency report use case
///
/// This port defines the interface that driving adapters (the tool handler,
/// the CLI) use to request a dependency report for one file.
pub trait DependencyReportPort {
    /// Produces the dependency report for the requested file
    ///
    /// # Errors
    /// Returns an error only when the target cannot be resolved or its
    /// dependency data cannot be obtained. Formatting and persistence
    /// problems never surface here.
    fn analyze(&self, request: ReportRequest) -> Result<ReportResponse>;
}
