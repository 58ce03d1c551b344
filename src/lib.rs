//! dep-report - forward file dependency reports
//!
//! This library turns the forward dependencies of a source file into a
//! deterministic XML document, a short text summary and a JSON envelope,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_report::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let project = Path::new("/path/to/project");
//! let provider =
//!     IndexedDependencyProvider::from_file(project, &project.join(DEFAULT_INDEX_FILE_NAME))?;
//!
//! // Create use case
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     provider,
//!     XmlDocumentFormatter::new(),
//!     FileSystemReportSink::new(),
//!     StderrProgressReporter::new(),
//!     ReportOptions::default(),
//! );
//!
//! // Execute
//! let response = use_case.execute(ReportRequest::new("src/Main.kt")?)?;
//! println!("{}", response.envelope.to_json());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::tool::{
        FileDependenciesArgs, FileDependenciesTool, ToolDefinition, ToolResponse,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReportSink, FileSystemWriter, IndexedDependencyProvider, StdoutPresenter,
        DEFAULT_INDEX_FILE_NAME,
    };
    pub use crate::adapters::outbound::formatters::XmlDocumentFormatter;
    pub use crate::application::dto::{ReportEnvelope, ReportOptions, ReportRequest, ReportResponse};
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_report::domain::{DependencyMap, FileId, ReportDocument};
    pub use crate::dependency_report::policies::{ReportLocation, SummaryOrder};
    pub use crate::dependency_report::services::{DocumentBuilder, SummaryBuilder};
    pub use crate::ports::inbound::DependencyReportPort;
    pub use crate::ports::outbound::{
        DependencyProvider, DocumentSerializer, OutputPresenter, PersistOutcome,
        ProgressReporter, ReportSink,
    };
    pub use crate::shared::Result;
}
