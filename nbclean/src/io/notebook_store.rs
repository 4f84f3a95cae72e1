//! Notebook load/save helpers.
//!
//! Notebooks are handled as untyped JSON trees with key order and number
//! text preserved, so fields nbclean does not know about survive a rewrite.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::FileError;

/// Read and parse a notebook file.
pub fn load_notebook(path: &Path) -> Result<Value, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| FileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a notebook as indented JSON with a trailing newline.
pub fn serialize_notebook(document: &Value, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Atomically replace a notebook on disk (temp file + rename).
///
/// Symbolic links are resolved first so the link survives and its target is
/// replaced. Read-only notebooks are refused. The original file keeps its
/// contents if any step fails.
pub fn write_notebook(path: &Path, document: &Value, indent: usize) -> Result<(), FileError> {
    let payload = serialize_notebook(document, indent).map_err(|source| FileError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = payload.len(), "writing notebook");
    write_atomic(path, &payload).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let permissions = fs::metadata(&target)?.permissions();
    if permissions.readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "notebook is read-only",
        ));
    }
    let parent = target.parent().unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
