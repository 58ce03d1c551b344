pub mod dependency_map;
pub mod file_id;
pub mod report_document;

pub use dependency_map::{DependencyEntry, DependencyMap};
pub use file_id::FileId;
pub use report_document::{FileNode, ReportDocument};
