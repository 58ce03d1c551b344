use crate::shared::error::DependencyReportError;
use crate::shared::Result;

/// ReportRequest - request DTO for the dependency report use case
///
/// Carries the single input of the tool: a project-relative file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Path of the file to analyze, relative to the project root
    pub file_path: String,
}

impl ReportRequest {
    /// Creates a request, rejecting blank paths
    pub fn new(file_path: impl Into<String>) -> Result<Self> {
        let file_path = file_path.into();
        if file_path.trim().is_empty() {
            return Err(DependencyReportError::Validation {
                message: "File path cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self { file_path })
    }
}
