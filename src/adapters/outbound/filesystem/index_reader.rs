use crate::dependency_report::domain::{DependencyMap, FileId};
use crate::ports::outbound::DependencyProvider;
use crate::shared::error::DependencyReportError;
use crate::shared::security::{read_regular_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Component, Path, PathBuf};

/// Default file name of the dependency index inside a project
pub const DEFAULT_INDEX_FILE_NAME: &str = ".dep-index.json";

/// Raw index layout: file path -> direct dependency paths (`null` = unresolved)
type RawIndex = HashMap<String, Option<Vec<Option<String>>>>;

/// IndexedDependencyProvider adapter backed by a JSON dependency index
///
/// This adapter implements the DependencyProvider port for an index exported
/// by an external analysis engine. The index maps each file to its direct
/// dependencies; this adapter only follows those edges to collect what is
/// reachable from the requested file. Relative paths in the index are taken
/// relative to the project root.
pub struct IndexedDependencyProvider {
    project_root: PathBuf,
    edges: HashMap<FileId, Vec<FileId>>,
    known_files: HashSet<FileId>,
}

impl IndexedDependencyProvider {
    /// Maximum traversal depth when following dependency chains
    const MAX_TRAVERSAL_DEPTH: usize = 100;

    /// Loads the index at `index_path` for the project at `project_root`
    ///
    /// # Errors
    /// Returns an error if the index is missing, unsafe to read (symlink,
    /// not a regular file, too large) or is not valid index JSON
    pub fn from_file(project_root: &Path, index_path: &Path) -> Result<Self> {
        if !index_path.exists() {
            return Err(DependencyReportError::IndexReadError {
                path: index_path.to_path_buf(),
                details: "Index file does not exist".to_string(),
            }
            .into());
        }

        let content = read_regular_file(index_path, "dependency index", MAX_INPUT_FILE_SIZE)
            .map_err(|e| DependencyReportError::IndexReadError {
                path: index_path.to_path_buf(),
                details: e.to_string(),
            })?;

        Self::from_json(project_root, &content).map_err(|e| {
            DependencyReportError::IndexParseError {
                path: index_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Builds a provider from index JSON text
    pub fn from_json(project_root: &Path, content: &str) -> Result<Self> {
        let raw: RawIndex = serde_json::from_str(content)?;
        Ok(Self::from_raw(project_root, raw))
    }

    fn from_raw(project_root: &Path, raw: RawIndex) -> Self {
        let mut edges = HashMap::new();
        let mut known_files = HashSet::new();

        for (file, dependencies) in raw {
            let file_id = FileId::new(normalize_path(project_root, &file));
            let dependency_ids: Vec<FileId> = dependencies
                .unwrap_or_default()
                .into_iter()
                .map(|dep| match dep {
                    Some(path) => FileId::new(normalize_path(project_root, &path)),
                    None => FileId::unresolved(),
                })
                .collect();

            known_files.extend(dependency_ids.iter().filter(|d| d.is_resolved()).cloned());
            known_files.insert(file_id.clone());
            edges.insert(file_id, dependency_ids);
        }

        Self {
            project_root: project_root.to_path_buf(),
            edges,
            known_files,
        }
    }
}

impl DependencyProvider for IndexedDependencyProvider {
    fn resolve(&self, relative_path: &str) -> Result<FileId> {
        let absolute = normalize_path(&self.project_root, relative_path);
        let absolute_path = PathBuf::from(&absolute);

        if absolute_path.is_dir() {
            return Err(DependencyReportError::NotAnalyzable {
                path: absolute_path,
                reason: "Path is a directory, not a file".to_string(),
            }
            .into());
        }

        let file_id = FileId::new(absolute);
        if !self.known_files.contains(&file_id) {
            return Err(DependencyReportError::TargetNotFound {
                path: absolute_path,
                hint: format!(
                    "The file is not part of the dependency index for project \"{}\". \
                     Check the path or regenerate the index.",
                    self.project_root.display()
                ),
            }
            .into());
        }

        Ok(file_id)
    }

    /// Walks the index breadth-first from `root`
    ///
    /// Every file is first reached at its shortest distance from the root,
    /// so the depth limit truncates the same files whatever the edge order.
    fn compute_dependencies(&self, root: &FileId) -> Result<DependencyMap> {
        let mut map = DependencyMap::new();
        map.insert(root.clone(), std::iter::empty());

        let mut visited = HashSet::from([root.clone()]);
        let mut queue = VecDeque::from([(root.clone(), 0usize)]);
        let mut truncated = false;

        while let Some((file, depth)) = queue.pop_front() {
            if depth >= Self::MAX_TRAVERSAL_DEPTH {
                truncated = true;
                continue;
            }

            let Some(dependencies) = self.edges.get(&file) else {
                continue;
            };
            if dependencies.is_empty() {
                continue;
            }

            map.insert(file.clone(), dependencies.iter().cloned());

            for dependency in dependencies.iter().filter(|d| d.is_resolved()) {
                if visited.insert(dependency.clone()) {
                    queue.push_back((dependency.clone(), depth + 1));
                }
            }
        }

        if truncated {
            tracing::warn!(
                "Maximum traversal depth ({}) reached from '{}'. Dependency chain may be truncated.",
                Self::MAX_TRAVERSAL_DEPTH,
                root
            );
        }

        Ok(map)
    }
}

/// Joins `raw` onto `root` when relative and removes `.` / `..` components
/// lexically. The filesystem is not consulted.
fn normalize_path(root: &Path, raw: &str) -> String {
    let joined = if Path::new(raw).is_absolute() {
        PathBuf::from(raw)
    } else {
        root.join(raw)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized.to_string_lossy().into_owned()
}
