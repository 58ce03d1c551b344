use crate::ports::outbound::{PersistOutcome, ReportSink};
use crate::shared::security::is_symlink;
use std::fs;
use std::path::Path;

/// FileSystemReportSink adapter for the side-channel report document
///
/// This adapter implements the ReportSink port. It creates missing parent
/// directories and overwrites existing files. Every failure is turned into
/// [`PersistOutcome::Failed`]; nothing is retried.
pub struct FileSystemReportSink;

impl FileSystemReportSink {
    pub fn new() -> Self {
        Self
    }

    fn try_persist(document: &str, destination: &Path) -> Result<(), String> {
        if is_symlink(destination) {
            return Err(format!(
                "Security: {} is a symbolic link. Writing to symbolic links is not allowed.",
                destination.display()
            ));
        }

        if let Some(parent) = destination.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).map_err(|e| {
                    format!("Failed to create directory {}: {}", parent.display(), e)
                })?;
            }
        }

        fs::write(destination, document)
            .map_err(|e| format!("Failed to write {}: {}", destination.display(), e))
    }
}

impl Default for FileSystemReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for FileSystemReportSink {
    fn persist(&self, document: &str, destination: &Path) -> PersistOutcome {
        match Self::try_persist(document, destination) {
            Ok(()) => PersistOutcome::Written,
            Err(reason) => PersistOutcome::Failed(reason),
        }
    }
}
