use crate::dependency_report::domain::{DependencyMap, FileNode, ReportDocument};

/// DocumentBuilder service turning a dependency map into a report tree
///
/// This service contains pure business logic with no I/O dependencies.
pub struct DocumentBuilder;

impl DocumentBuilder {
    /// Builds a forward-analysis ReportDocument from a dependency map
    ///
    /// Top-level file nodes are sorted by path, case-insensitively ascending.
    /// The sort is stable, so keys that compare equal keep their map order.
    /// Dependencies inside each node keep the map's insertion order.
    /// Unresolved file ids are rendered as `unknown`.
    ///
    /// # Arguments
    /// * `map` - The dependency map to render (may be empty)
    ///
    /// # Returns
    /// A ReportDocument; an empty map yields a document with no file nodes
    pub fn build(map: &DependencyMap) -> ReportDocument {
        let mut files: Vec<FileNode> = map
            .entries()
            .iter()
            .map(|entry| {
                let dependencies = entry
                    .dependencies()
                    .iter()
                    .map(|d| d.display_path().to_string())
                    .collect();
                FileNode::new(entry.file().display_path().to_string(), dependencies)
            })
            .collect();

        files.sort_by(|a, b| Self::compare_paths(a.path(), b.path()));

        ReportDocument::forward(files)
    }

    /// Case-insensitive ordering consistent with plain lexicographic order
    pub(crate) fn compare_paths(a: &str, b: &str) -> std::cmp::Ordering {
        a.chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
    }
}
