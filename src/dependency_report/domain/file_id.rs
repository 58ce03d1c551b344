/// Marker rendered for a file whose path could not be resolved
pub const UNKNOWN_PATH: &str = "unknown";

/// FileId value object identifying a file by its absolute path
///
/// The host may hand out file handles without a usable path. Those are kept
/// as unresolved ids and rendered as [`UNKNOWN_PATH`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(Option<String>);

impl FileId {
    /// Creates a FileId from a path. An empty or blank path yields an
    /// unresolved id.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(path))
        }
    }

    pub fn unresolved() -> Self {
        Self(None)
    }

    pub fn path(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.0.is_some()
    }

    /// Path used in documents: the real path or the `unknown` marker
    pub fn display_path(&self) -> &str {
        self.path().unwrap_or(UNKNOWN_PATH)
    }

    /// Last path segment, accepting both `/` and `\` separators
    pub fn short_name(&self) -> &str {
        let path = self.display_path();
        let trimmed = path.trim_end_matches(is_separator);
        if trimmed.is_empty() {
            return path;
        }
        trimmed.rsplit(is_separator).next().unwrap_or(trimmed)
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_path())
    }
}

impl From<&str> for FileId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FileId {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
