//! Optional per-tree configuration stored at `<root>/.nbclean.toml`.
//!
//! The file name starts with a dot, so the walker never treats it as a
//! candidate or descends past it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".nbclean.toml";

/// Cleaner configuration (TOML).
///
/// Missing fields default to the notebook conventions.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CleanerConfig {
    /// File extension of notebook files, without the leading dot.
    pub extension: String,

    /// Spaces per indentation level when rewriting a notebook.
    pub indent: usize,

    /// Follow symbolic links while walking the tree.
    pub follow_links: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            extension: "ipynb".to_string(),
            indent: 1,
            follow_links: false,
        }
    }
}

impl CleanerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = self.extension.as_str();
        if extension.is_empty() {
            return Err(ConfigError::Invalid("extension must be non-empty".into()));
        }
        if extension.trim() != extension {
            return Err(ConfigError::Invalid(
                "extension must not have surrounding whitespace".into(),
            ));
        }
        if extension.starts_with('.') {
            return Err(ConfigError::Invalid(
                "extension must not start with '.'".into(),
            ));
        }
        if extension.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(
                "extension must not contain path separators".into(),
            ));
        }
        if !(1..=8).contains(&self.indent) {
            return Err(ConfigError::Invalid("indent must be between 1 and 8".into()));
        }
        Ok(())
    }
}

/// Location of the config file for a root directory.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CleanerConfig::default()`.
pub fn load_config(path: &Path) -> Result<CleanerConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CleanerConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: CleanerConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    debug!(?cfg, "config loaded");
    Ok(cfg)
}
