mod report_location;
mod summary_order;

pub use report_location::ReportLocation;
pub use summary_order::SummaryOrder;
