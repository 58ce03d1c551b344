/// Mock implementations for testing
mod mock_dependency_provider;
mod mock_progress_reporter;
mod mock_report_sink;

pub use mock_dependency_provider::MockDependencyProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_sink::MockReportSink;
