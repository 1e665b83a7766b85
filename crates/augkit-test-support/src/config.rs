//! Configuration file support for the mocks.
//!
//! Settings come from `.augkit.toml` files found in a starting directory and
//! its parents. Files closer to the starting directory take priority.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Name of the configuration file searched for.
pub const CONFIG_FILE_NAME: &str = ".augkit.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestSupportConfig {
    /// Image-decode mock settings.
    pub imread: ImreadConfig,
    /// File-open mock settings.
    pub open: OpenConfig,
}

/// Image-decode mock configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImreadConfig {
    /// Seed for the template images; random when absent.
    pub seed: Option<u64>,
}

/// File-open mock configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// Files every new mock starts with, keyed by name.
    pub files: HashMap<String, String>,
}

impl TestSupportConfig {
    /// Loads and merges every `.augkit.toml` from `start` up to the root.
    ///
    /// Missing files are ignored; unreadable or malformed files are logged
    /// and skipped.
    #[must_use]
    pub fn load_from(start: &Path) -> Self {
        let mut config = Self::default();

        // Farthest first so nearer files override.
        let mut paths: Vec<PathBuf> = start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
            .collect();
        paths.reverse();

        if paths.is_empty() {
            debug!("No {CONFIG_FILE_NAME} found above {}", start.display());
        }

        for path in paths {
            info!("Loading config: {}", path.display());
            match Self::load_file(&path) {
                Ok(layer) => config.merge(layer),
                Err(e) => warn!("{e:#}"),
            }
        }

        config
    }

    /// Reads and parses a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    pub fn merge(&mut self, other: Self) {
        self.imread.seed = other.imread.seed.or(self.imread.seed);
        self.open.files.extend(other.open.files);
    }
}

/// Search for `.augkit.toml` in the given directory and its parents,
/// returning the nearest one.
#[must_use]
pub fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TestSupportConfig::default();
        assert!(config.imread.seed.is_none());
        assert!(config.open.files.is_empty());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = TestSupportConfig::from_toml_str("").unwrap();
        assert_eq!(config, TestSupportConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = TestSupportConfig::from_toml_str(
            r#"
[imread]
seed = 1234

[open.files]
"labels.txt" = "cat\ndog\n"
"empty.txt" = ""
"#,
        )
        .unwrap();

        assert_eq!(config.imread.seed, Some(1234));
        assert_eq!(config.open.files.len(), 2);
        assert_eq!(config.open.files["labels.txt"], "cat\ndog\n");
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(TestSupportConfig::from_toml_str("[imread]\nseed = 'abc'\n").is_err());
    }

    #[test]
    fn test_merge_prefers_override() {
        let mut base = TestSupportConfig::from_toml_str(
            r#"
[imread]
seed = 1

[open.files]
"a.txt" = "base"
"b.txt" = "base"
"#,
        )
        .unwrap();
        let layer = TestSupportConfig::from_toml_str(
            r#"
[open.files]
"b.txt" = "override"
"#,
        )
        .unwrap();

        base.merge(layer);

        // Seed preserved from base
        assert_eq!(base.imread.seed, Some(1));
        assert_eq!(base.open.files["a.txt"], "base");
        assert_eq!(base.open.files["b.txt"], "override");
    }

    #[test]
    fn test_merge_override_seed() {
        let mut base = TestSupportConfig::from_toml_str("[imread]\nseed = 1\n").unwrap();
        base.merge(TestSupportConfig::from_toml_str("[imread]\nseed = 2\n").unwrap());
        assert_eq!(base.imread.seed, Some(2));
    }

    #[test]
    fn test_layered_files() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("crate").join("tests");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[imread]\nseed = 5\n\n[open.files]\n\"a.txt\" = \"outer\"\n",
        )
        .unwrap();
        std::fs::write(
            root.path().join("crate").join(CONFIG_FILE_NAME),
            "[open.files]\n\"a.txt\" = \"inner\"\n",
        )
        .unwrap();

        let config = TestSupportConfig::load_from(&nested);
        assert_eq!(config.imread.seed, Some(5));
        assert_eq!(config.open.files["a.txt"], "inner");

        assert_eq!(
            find_config_in_parents(&nested),
            Some(root.path().join("crate").join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let inner = root.path().join("inner");
        std::fs::create_dir_all(&inner).unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "[imread]\nseed = 9\n").unwrap();
        std::fs::write(inner.join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = TestSupportConfig::load_from(&inner);
        assert_eq!(config.imread.seed, Some(9));

        let err = TestSupportConfig::load_file(&inner.join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
