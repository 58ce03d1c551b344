/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (dependency engine, file system, console).
pub mod dependency_provider;
pub mod document_serializer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_sink;

pub use dependency_provider::DependencyProvider;
pub use document_serializer::DocumentSerializer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_sink::{PersistOutcome, ReportSink};
