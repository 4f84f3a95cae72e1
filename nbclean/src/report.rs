//! Human-readable run output.
//!
//! Rewrite notices and the final summary go to stdout, per-file failures to
//! stderr. None of it is meant to be machine-parsed.

use std::path::Path;

use crate::clean::RunSummary;
use crate::error::FileError;

/// Sink for the observable events of a cleaning run.
pub trait Reporter {
    /// Called right before a notebook is overwritten.
    fn rewriting(&mut self, path: &Path);
    /// Called once per file that could not be processed.
    fn failed(&mut self, error: &FileError);
    /// Called once after the whole tree was visited.
    fn finished(&mut self, summary: &RunSummary);
}

/// Prints to the process's stdout/stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn rewriting(&mut self, path: &Path) {
        println!("rewriting notebook: {}", path.display());
    }

    fn failed(&mut self, error: &FileError) {
        eprintln!("error: {}", error);
    }

    fn finished(&mut self, summary: &RunSummary) {
        println!(
            "cleaned {} notebook(s), {} unchanged, {} failed",
            summary.rewritten.len(),
            summary.unchanged,
            summary.failures.len()
        );
    }
}
