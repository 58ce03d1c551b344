use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to tell a failed analysis
/// apart from a bad invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the dependency report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (target not found, unreadable index, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency reporting.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DependencyReportError {
    #[error("Target file not found: {path}\n\n💡 Hint: {hint}")]
    TargetNotFound { path: PathBuf, hint: String },

    #[error("File cannot be analyzed: {path}\nReason: {reason}")]
    NotAnalyzable { path: PathBuf, reason: String },

    #[error("Failed to read dependency index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the index file exists and you have read permissions")]
    IndexReadError { path: PathBuf, details: String },

    #[error("Failed to parse dependency index: {path}\nDetails: {details}\n\n💡 Hint: The index must be a JSON object mapping file paths to arrays of dependency paths")]
    IndexParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for request and value-object construction
    #[error("Validation error: {message}")]
    Validation { message: String },
}
