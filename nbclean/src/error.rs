//! Error taxonomy for a cleaning run.
//!
//! - [`ConfigError`]: bad root argument or config file. Fatal, raised before
//!   any traversal starts.
//! - [`FileError`]: anything that goes wrong with a single notebook. Reported
//!   and skipped; never aborts the run.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::mutator::DocumentError;

/// Invalid invocation or configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid argument: input path not provided")]
    MissingRoot,

    #[error("path must be a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Per-file failure. The file is left as it was on disk.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("read notebook {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse notebook {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed notebook {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("serialize notebook {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("rewrite notebook {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl FileError {
    /// Path of the file or directory the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Malformed { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. }
            | Self::Walk { path, .. } => path.as_path(),
        }
    }
}
