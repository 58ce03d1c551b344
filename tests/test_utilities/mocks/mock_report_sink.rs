use dep_report::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportSink for testing that captures persisted documents
#[derive(Default, Clone)]
pub struct MockReportSink {
    pub writes: Arc<Mutex<Vec<(PathBuf, String)>>>,
    pub failure: Option<String>,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn get_writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().unwrap().clone()
    }
}

impl ReportSink for MockReportSink {
    fn persist(&self, document: &str, destination: &Path) -> PersistOutcome {
        if let Some(reason) = &self.failure {
            return PersistOutcome::Failed(reason.clone());
        }
        self.writes
            .lock()
            .unwrap()
            .push((destination.to_path_buf(), document.to_string()));
        PersistOutcome::Written
    }
}
