use super::FileId;
use std::collections::{HashMap, HashSet};

/// One key of a [`DependencyMap`]: a file and the files it depends on
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyEntry {
    file: FileId,
    dependencies: Vec<FileId>,
}

impl DependencyEntry {
    pub fn file(&self) -> &FileId {
        &self.file
    }

    /// Dependencies in insertion order, without duplicates
    pub fn dependencies(&self) -> &[FileId] {
        &self.dependencies
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

/// DependencyMap aggregate mapping each file to the set of files it depends on
///
/// Keys are unique and keep insertion order. Each dependency set is
/// deduplicated and also keeps insertion order, so iterating the same map
/// twice always yields the same sequence. The map is a flat structure:
/// cycles and self references are stored as-is and never traversed.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    entries: Vec<DependencyEntry>,
    index: HashMap<FileId, usize>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `file` with the given dependencies.
    ///
    /// Inserting an existing key merges the new dependencies into its set,
    /// keeping the key at its original position.
    pub fn insert<I>(&mut self, file: FileId, dependencies: I)
    where
        I: IntoIterator<Item = FileId>,
    {
        let position = self.ensure_entry(file);
        let entry = &mut self.entries[position];
        let mut seen: HashSet<FileId> = entry.dependencies.iter().cloned().collect();

        for dependency in dependencies {
            if seen.insert(dependency.clone()) {
                entry.dependencies.push(dependency);
            }
        }
    }

    /// Adds a single dependency edge, creating the key if needed
    pub fn add_dependency(&mut self, file: FileId, dependency: FileId) {
        self.insert(file, std::iter::once(dependency));
    }

    fn ensure_entry(&mut self, file: FileId) -> usize {
        if let Some(&position) = self.index.get(&file) {
            return position;
        }
        let position = self.entries.len();
        self.index.insert(file.clone(), position);
        self.entries.push(DependencyEntry {
            file,
            dependencies: Vec::new(),
        });
        position
    }

    pub fn get(&self, file: &FileId) -> Option<&DependencyEntry> {
        self.index.get(file).map(|&position| &self.entries[position])
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[DependencyEntry] {
        &self.entries
    }

    /// Number of keys (files analyzed)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all dependency-set sizes across all keys
    pub fn total_dependency_count(&self) -> usize {
        self.entries.iter().map(|e| e.dependency_count()).sum()
    }
}

impl FromIterator<(FileId, Vec<FileId>)> for DependencyMap {
    fn from_iter<T: IntoIterator<Item = (FileId, Vec<FileId>)>>(iter: T) -> Self {
        let mut map = DependencyMap::new();
        for (file, dependencies) in iter {
            map.insert(file, dependencies);
        }
        map
    }
}
