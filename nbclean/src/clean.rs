//! Tree-wide cleanup: discover notebooks, clear outputs, rewrite dirty files.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::mutator::{Cleanup, clear_notebook};
use crate::error::{ConfigError, FileError};
use crate::io::config::{CleanerConfig, config_path, load_config};
use crate::io::notebook_store::{load_notebook, write_notebook};
use crate::io::walk::discover_notebooks;
use crate::report::Reporter;

/// What happened to one notebook that was processed without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Nothing to clear; the file was not reopened for writing.
    Unchanged(Cleanup),
    /// Outputs were cleared and the file was replaced.
    Rewritten(Cleanup),
}

/// Aggregate result of one run over a tree.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rewritten: Vec<PathBuf>,
    pub unchanged: usize,
    pub failures: Vec<FileError>,
}

/// Check the root argument before anything touches the filesystem.
pub fn validate_root(root: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let root = root.ok_or(ConfigError::MissingRoot)?;
    if !root.is_dir() {
        return Err(ConfigError::NotADirectory { path: root });
    }
    Ok(root)
}

/// Validate the root, load its config, and clean the whole tree.
pub fn run<R: Reporter>(root: Option<PathBuf>, reporter: &mut R) -> Result<RunSummary, ConfigError> {
    let root = validate_root(root)?;
    let cfg = load_config(&config_path(&root))?;
    Ok(clean_tree(&root, &cfg, reporter))
}

/// Clean every notebook below `root`.
///
/// Per-file failures are reported and collected; they never stop the walk.
pub fn clean_tree<R: Reporter>(root: &Path, cfg: &CleanerConfig, reporter: &mut R) -> RunSummary {
    info!(root = %root.display(), extension = %cfg.extension, "cleaning tree");
    let mut summary = RunSummary::default();

    for item in discover_notebooks(root, cfg) {
        let result = item.and_then(|path| {
            let outcome = clean_file(&path, cfg, reporter)?;
            Ok((path, outcome))
        });
        match result {
            Ok((path, FileOutcome::Rewritten(_))) => summary.rewritten.push(path),
            Ok((_, FileOutcome::Unchanged(_))) => summary.unchanged += 1,
            Err(err) => {
                reporter.failed(&err);
                summary.failures.push(err);
            }
        }
    }

    info!(
        rewritten = summary.rewritten.len(),
        unchanged = summary.unchanged,
        failed = summary.failures.len(),
        "tree cleaned"
    );
    reporter.finished(&summary);
    summary
}

/// Clean a single notebook, rewriting it only if some cell had outputs.
pub fn clean_file<R: Reporter>(
    path: &Path,
    cfg: &CleanerConfig,
    reporter: &mut R,
) -> Result<FileOutcome, FileError> {
    let mut document = load_notebook(path)?;
    let cleanup = clear_notebook(&mut document).map_err(|source| FileError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    for skipped in &cleanup.skipped {
        warn!(
            path = %path.display(),
            cell = skipped.index,
            reason = %skipped.reason,
            "skipped malformed cell"
        );
    }

    if !cleanup.is_dirty() {
        debug!(path = %path.display(), cells = cleanup.cells, "notebook already clean");
        return Ok(FileOutcome::Unchanged(cleanup));
    }

    debug!(
        path = %path.display(),
        cleared_cells = cleanup.cleared_cells,
        removed_outputs = cleanup.removed_outputs,
        "clearing outputs"
    );
    reporter.rewriting(path);
    write_notebook(path, &document, cfg.indent)?;
    Ok(FileOutcome::Rewritten(cleanup))
}
