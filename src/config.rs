/// Scanner configuration
///
/// Every field has a compiled-in default; a JSON file and command-line flags
/// can override them.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::expectations::ExpectationTable;
use crate::error::{DiagnosticError, Result};

pub const DEFAULT_ROOT: &str = "/var/www/html/program/safe_pump";
pub const DEFAULT_SOURCE_DIR: &str = "solana-program/src";
pub const DEFAULT_SOURCE_PATTERN: &str = "*.rs";
pub const DEFAULT_MANIFEST_NAME: &str = "Cargo.toml";
pub const DEFAULT_REPORT_FILE: &str = "solana_program_diagnostic_report.txt";
pub const DEFAULT_LOG_FILE: &str = "solana_program_diagnostic.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Workspace root; must exist for a run to produce a report
    pub root: PathBuf,

    /// Directory searched for source files, relative to `root`
    pub source_dir: PathBuf,

    /// File name pattern for source files (`*` and `?` wildcards)
    pub source_pattern: String,

    /// Exact file name of manifests
    pub manifest_name: String,

    pub report_file: PathBuf,

    /// Optional JSON export of the scan results
    pub json_report: Option<PathBuf>,

    pub expectations: ExpectationTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            source_pattern: DEFAULT_SOURCE_PATTERN.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            json_report: None,
            expectations: ExpectationTable::default(),
        }
    }
}

impl Config {
    /// Directory the source pass walks
    pub fn source_root(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Parse a configuration from JSON text
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| DiagnosticError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from file if provided.
    ///
    /// A path that does not exist falls back to the defaults with a warning.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!("Configuration file not found: {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| DiagnosticError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text, path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from("/var/www/html/program/safe_pump"));
        assert_eq!(
            config.source_root(),
            PathBuf::from("/var/www/html/program/safe_pump/solana-program/src")
        );
        assert_eq!(config.manifest_name, "Cargo.toml");
        assert_eq!(&config.expectations, ExpectationTable::builtin());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"root": "/tmp/ws"}"#, Path::new("cfg.json")).unwrap();
        assert_eq!(config.root, PathBuf::from("/tmp/ws"));
        assert_eq!(config.report_file, PathBuf::from(DEFAULT_REPORT_FILE));
        assert_eq!(config.expectations.len(), 4);
    }

    #[test]
    fn test_json_replaces_expectations() {
        let config = Config::from_json(
            r#"{"expectations": [{"name": "solana-program", "version": "1.18.26", "path": "./sp"}]}"#,
            Path::new("cfg.json"),
        )
        .unwrap();
        assert_eq!(config.expectations.len(), 1);
        assert_eq!(
            config.expectations.get("solana-program").unwrap().required_version,
            "1.18.26"
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_json(r#"{"rooot": "/tmp"}"#, Path::new("cfg.json")).unwrap_err();
        assert!(matches!(err, DiagnosticError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.json").as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
