use crate::dependency_report::domain::{DependencyMap, FileId};
use crate::shared::Result;

/// DependencyProvider port for the external dependency analysis engine
///
/// This port abstracts the collaborator that owns dependency computation.
/// The report core never sees how dependencies are found; it only consumes
/// the resulting map.
pub trait DependencyProvider {
    /// Resolves a project-relative path to the file it identifies
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist in the analyzed project
    /// - The path points at something that cannot be analyzed (e.g. a directory)
    fn resolve(&self, relative_path: &str) -> Result<FileId>;

    /// Computes the forward dependencies reachable from `root`
    ///
    /// # Returns
    /// A map from every analyzed file to the files it depends on
    ///
    /// # Errors
    /// Returns an error if the dependency data cannot be obtained
    fn compute_dependencies(&self, root: &FileId) -> Result<DependencyMap>;
}
