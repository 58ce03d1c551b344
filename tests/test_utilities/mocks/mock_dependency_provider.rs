use dep_report::prelude::*;

/// Mock DependencyProvider for testing
///
/// Resolves every path under a fixed `/proj` root and returns a canned map.
pub struct MockDependencyProvider {
    pub edges: Vec<(String, Vec<Option<String>>)>,
    pub missing_target: bool,
    pub should_fail: bool,
}

impl MockDependencyProvider {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            missing_target: false,
            should_fail: false,
        }
    }

    /// Adds a file with resolved dependencies
    pub fn with_file(mut self, file: &str, dependencies: &[&str]) -> Self {
        self.edges.push((
            file.to_string(),
            dependencies.iter().map(|d| Some(d.to_string())).collect(),
        ));
        self
    }

    /// Adds a file whose dependencies may include unresolved entries
    pub fn with_raw_file(mut self, file: &str, dependencies: Vec<Option<&str>>) -> Self {
        self.edges.push((
            file.to_string(),
            dependencies
                .into_iter()
                .map(|d| d.map(str::to_string))
                .collect(),
        ));
        self
    }

    pub fn with_missing_target() -> Self {
        Self {
            missing_target: true,
            ..Self::new()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl Default for MockDependencyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyProvider for MockDependencyProvider {
    fn resolve(&self, relative_path: &str) -> Result<FileId> {
        if self.missing_target {
            anyhow::bail!("Target file not found: /proj/{}", relative_path);
        }
        Ok(FileId::new(format!("/proj/{}", relative_path)))
    }

    fn compute_dependencies(&self, _root: &FileId) -> Result<DependencyMap> {
        if self.should_fail {
            anyhow::bail!("Mock dependency engine failure");
        }

        let mut map = DependencyMap::new();
        for (file, dependencies) in &self.edges {
            map.insert(
                FileId::new(file.as_str()),
                dependencies.iter().map(|d| match d {
                    Some(path) => FileId::new(path.as_str()),
                    None => FileId::unresolved(),
                }),
            );
        }
        Ok(map)
    }
}
