use crate::dependency_report::policies::{ReportLocation, SummaryOrder};

/// ReportOptions - per-run settings for the dependency report use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Where the side-channel document is persisted
    pub location: ReportLocation,
    /// Order of files in the text summary
    pub summary_order: SummaryOrder,
}

impl ReportOptions {
    pub fn new(location: ReportLocation, summary_order: SummaryOrder) -> Self {
        Self {
            location,
            summary_order,
        }
    }
}
