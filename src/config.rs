//! Rewrite configuration.
//!
//! The table catalog and dataset folder list live in one immutable
//! structure handed explicitly to the batch driver; nothing reads them as
//! ambient state. An optional `fixql.toml` in the working directory can
//! supply the root path and the dataset list; the catalog itself is fixed.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FixqlError, FixqlResult};
use crate::schema::SchemaCatalog;

/// Dataset folder rewritten when nothing else is configured.
pub const DEFAULT_DATASET: &str = "50";

/// Everything the batch driver needs besides the root path.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Table schemas to rewrite, in batch order.
    pub catalog: SchemaCatalog,
    /// Dataset folder names under the root, in batch order.
    pub datasets: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            catalog: SchemaCatalog::standard(),
            datasets: vec![DEFAULT_DATASET.to_string()],
        }
    }
}

impl RewriteConfig {
    /// Apply dataset overrides: command-line values win over file values,
    /// and an empty command line falls back to the file, then to the
    /// built-in default already in place.
    pub fn resolve_datasets(mut self, cli: &[String], file: Option<Vec<String>>) -> Self {
        if !cli.is_empty() {
            self.datasets = cli.to_vec();
        } else if let Some(datasets) = file {
            self.datasets = datasets;
        }
        self
    }
}

/// On-disk configuration (`fixql.toml`).
///
/// ```toml
/// root = "/data/fixtures"
/// datasets = ["50", "100"]
/// ```
///
/// Both keys are optional; CLI flags take precedence over either.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub datasets: Option<Vec<String>>,
}

impl FileConfig {
    /// Load from a TOML file, returning the default when the file does not
    /// exist. Unreadable or invalid TOML is a configuration error.
    pub fn load(path: &Path) -> FixqlResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FixqlError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RewriteConfig::default();
        assert_eq!(config.datasets, ["50"]);
        assert_eq!(config.catalog.len(), 5);
    }

    #[test]
    fn test_dataset_precedence() {
        let cli = ["100".to_string()];
        let file = Some(vec!["5000".to_string()]);

        // Flag beats file beats default.
        let config = RewriteConfig::default().resolve_datasets(&cli, file.clone());
        assert_eq!(config.datasets, ["100"]);
        let config = RewriteConfig::default().resolve_datasets(&[], file);
        assert_eq!(config.datasets, ["5000"]);
        let config = RewriteConfig::default().resolve_datasets(&[], None);
        assert_eq!(config.datasets, ["50"]);
    }

    #[test]
    fn test_file_config_parses_both_keys() {
        let parsed: FileConfig =
            toml::from_str("root = \"/data/fixtures\"\ndatasets = [\"50\", \"100\"]").unwrap();
        assert_eq!(parsed.root.as_deref(), Some(Path::new("/data/fixtures")));
        assert_eq!(
            parsed.datasets.as_deref(),
            Some(&["50".to_string(), "100".to_string()][..])
        );
    }

    #[test]
    fn test_file_config_keys_are_optional() {
        let parsed: FileConfig = toml::from_str("").unwrap();
        assert!(parsed.root.is_none());
        assert!(parsed.datasets.is_none());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = FileConfig::load(Path::new("definitely-not-here/fixql.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.datasets.is_none());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixql.toml");
        std::fs::write(&path, "datasets = not-a-list").unwrap();
        let err = FileConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
