//! Test-only helpers for building notebooks and observing runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::clean::RunSummary;
use crate::error::FileError;
use crate::report::Reporter;

/// Minimal nbformat 4 document with `cells` first.
pub fn notebook(cells: Vec<Value>) -> Value {
    json!({
        "cells": cells,
        "metadata": {"kernelspec": {"name": "python3", "display_name": "Python 3"}},
        "nbformat": 4,
        "nbformat_minor": 5
    })
}

/// Code cell carrying the given outputs.
pub fn code_cell(outputs: Vec<Value>) -> Value {
    let execution_count = if outputs.is_empty() {
        Value::Null
    } else {
        json!(1)
    };
    json!({
        "cell_type": "code",
        "execution_count": execution_count,
        "metadata": {},
        "outputs": outputs,
        "source": ["print('hello')"]
    })
}

/// Markdown cell (no outputs key at all).
pub fn markdown_cell() -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": ["# Notes"]
    })
}

/// Write `document` compactly to `root/relative`, creating parent directories.
pub fn write_notebook_file(root: &Path, relative: &str, document: &Value) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create notebook parent");
    }
    fs::write(&path, serde_json::to_string(document).expect("serialize notebook"))
        .expect("write notebook");
    path
}

/// Reporter that remembers what it was told instead of printing.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub rewritten: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub finished: usize,
}

impl Reporter for RecordingReporter {
    fn rewriting(&mut self, path: &Path) {
        self.rewritten.push(path.to_path_buf());
    }

    fn failed(&mut self, error: &FileError) {
        self.failed.push(error.path().to_path_buf());
    }

    fn finished(&mut self, _summary: &RunSummary) {
        self.finished += 1;
    }
}
