//! Configuration file support for dep-report.
//!
//! Provides YAML-based configuration through `dep-report.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::dependency_report::policies::SummaryOrder;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub index_file: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub summary_order: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `summary_order`, if set. Validated on load.
    pub fn summary_order(&self) -> Result<Option<SummaryOrder>> {
        self.summary_order
            .as_deref()
            .map(|s| s.parse::<SummaryOrder>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.summary_order() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Set summary_order to \"map\" or \"sorted\".",
            e
        );
    }

    for (field, value) in [
        ("index_file", &config.index_file),
        ("report_dir", &config.report_dir),
        ("report_path", &config.report_path),
    ] {
        if matches!(value, Some(path) if path.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n💡 Hint: Remove the field to use the default.",
                field
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
index_file: build/deps.json
report_dir: /tmp/reports
summary_order: sorted
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.index_file, Some(PathBuf::from("build/deps.json")));
        assert_eq!(config.report_dir, Some(PathBuf::from("/tmp/reports")));
        assert!(config.report_path.is_none());
        assert_eq!(config.summary_order().unwrap(), Some(SummaryOrder::Sorted));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "report_path: /tmp/dependencies.xml\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.report_path,
            Some(PathBuf::from("/tmp/dependencies.xml"))
        );
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_summary_order_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "summary_order: random\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("Invalid summary order"));
        assert!(err.contains("💡 Hint:"));
    }

    #[test]
    fn test_empty_path_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "report_dir: \"\"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("report_dir must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
summary_order: map
format: json
check_cve: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.index_file.is_none());
        assert!(config.report_dir.is_none());
        assert!(config.report_path.is_none());
        assert_eq!(config.summary_order().unwrap(), None);
        assert!(config.unknown_fields.is_empty());
    }
}
