/// A `file` node of the report: one analyzed file and its dependency paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    path: String,
    dependencies: Vec<String>,
}

impl FileNode {
    pub fn new(path: String, dependencies: Vec<String>) -> Self {
        Self { path, dependencies }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// ReportDocument - ordered tree form of a dependency map
///
/// The root carries the analysis direction; only forward analysis is
/// produced, so `is_backward` is always false for documents built by
/// [`DocumentBuilder`](crate::dependency_report::services::DocumentBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    is_backward: bool,
    files: Vec<FileNode>,
}

impl ReportDocument {
    pub fn new(is_backward: bool, files: Vec<FileNode>) -> Self {
        Self { is_backward, files }
    }

    pub fn forward(files: Vec<FileNode>) -> Self {
        Self::new(false, files)
    }

    pub fn is_backward(&self) -> bool {
        self.is_backward
    }

    pub fn files(&self) -> &[FileNode] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
