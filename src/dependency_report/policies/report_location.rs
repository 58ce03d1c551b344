use chrono::{DateTime, Utc};
use std::path::PathBuf;
use uuid::Uuid;

/// Directory name under the system temp dir for per-invocation reports
const DEFAULT_REPORT_DIR_NAME: &str = "dep-report";

/// ReportLocation policy deciding where the side-channel document is written
///
/// `PerInvocation` gives every analysis its own file so concurrent
/// invocations never write to the same path. `Fixed` reuses one path for all
/// invocations; concurrent writers race and the last one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLocation {
    Fixed(PathBuf),
    PerInvocation { dir: PathBuf },
}

impl ReportLocation {
    pub fn fixed(path: PathBuf) -> Self {
        Self::Fixed(path)
    }

    pub fn per_invocation(dir: PathBuf) -> Self {
        Self::PerInvocation { dir }
    }

    /// Resolves the destination for a new invocation using the current
    /// time and a fresh v4 UUID
    pub fn resolve(&self) -> PathBuf {
        self.resolve_with(Utc::now(), Uuid::new_v4())
    }

    /// Resolves the destination for a given invocation timestamp and id
    ///
    /// # Returns
    /// `<dir>/dependencies-<YYYYMMDDTHHMMSSZ>-<uuid>.xml` for per-invocation
    /// locations, the configured path for fixed locations
    pub fn resolve_with(&self, timestamp: DateTime<Utc>, invocation_id: Uuid) -> PathBuf {
        match self {
            ReportLocation::Fixed(path) => path.clone(),
            ReportLocation::PerInvocation { dir } => dir.join(format!(
                "dependencies-{}-{}.xml",
                timestamp.format("%Y%m%dT%H%M%SZ"),
                invocation_id
            )),
        }
    }
}

impl Default for ReportLocation {
    fn default() -> Self {
        Self::per_invocation(std::env::temp_dir().join(DEFAULT_REPORT_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_location_is_stable() {
        let location = ReportLocation::fixed(PathBuf::from("/tmp/reports/dependencies.xml"));
        assert_eq!(location.resolve(), location.resolve());
        assert_eq!(
            location.resolve(),
            PathBuf::from("/tmp/reports/dependencies.xml")
        );
    }

    #[test]
    fn test_per_invocation_file_name() {
        let location = ReportLocation::per_invocation(PathBuf::from("/tmp/reports"));
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap();
        let id = Uuid::nil();

        let path = location.resolve_with(timestamp, id);
        assert_eq!(
            path,
            PathBuf::from(
                "/tmp/reports/dependencies-20261018T093005Z-00000000-0000-0000-0000-000000000000.xml"
            )
        );
    }

    #[test]
    fn test_per_invocation_paths_are_unique() {
        let location = ReportLocation::per_invocation(PathBuf::from("/tmp/reports"));
        assert_ne!(location.resolve(), location.resolve());
    }

    #[test]
    fn test_default_is_per_invocation_in_temp_dir() {
        match ReportLocation::default() {
            ReportLocation::PerInvocation { dir } => {
                assert!(dir.starts_with(std::env::temp_dir()));
                assert!(dir.ends_with("dep-report"));
            }
            other => panic!("unexpected location: {:?}", other),
        }
    }
}
