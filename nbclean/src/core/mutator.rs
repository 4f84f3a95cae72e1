//! Output-clearing rule applied to a parsed notebook.
//!
//! The document is a generic JSON tree; only `cells` and each cell's
//! `outputs` are ever inspected. Everything else passes through untouched.

use serde_json::Value;
use thiserror::Error;

pub const CELLS_KEY: &str = "cells";
pub const OUTPUTS_KEY: &str = "outputs";

/// Structural problems that make a whole document unprocessable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("top-level value is not an object")]
    NotAnObject,
    #[error("missing `cells` key")]
    MissingCells,
    #[error("`cells` is not an array")]
    CellsNotArray,
}

/// Why a single cell was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The cell itself is not a JSON object.
    CellNotObject,
    /// `outputs` is present but holds something other than an array or null.
    OutputsNotArray,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CellNotObject => f.write_str("cell is not an object"),
            Self::OutputsNotArray => f.write_str("`outputs` is not an array"),
        }
    }
}

/// Result of processing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// No outputs key, null, or already empty.
    Clean,
    /// A non-empty outputs array was emptied.
    Cleared { removed: usize },
    Skipped(SkipReason),
}

/// Cell that could not be processed, by position in the `cells` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedCell {
    pub index: usize,
    pub reason: SkipReason,
}

/// Per-document result. Its dirty flag decides whether the file is rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cleanup {
    pub cells: usize,
    pub cleared_cells: usize,
    pub removed_outputs: usize,
    pub skipped: Vec<SkippedCell>,
}

impl Cleanup {
    /// True iff at least one cell had a non-empty outputs array.
    pub fn is_dirty(&self) -> bool {
        self.cleared_cells > 0
    }

    fn record(&mut self, index: usize, outcome: CellOutcome) {
        self.cells += 1;
        match outcome {
            CellOutcome::Clean => {}
            CellOutcome::Cleared { removed } => {
                self.cleared_cells += 1;
                self.removed_outputs += removed;
            }
            CellOutcome::Skipped(reason) => self.skipped.push(SkippedCell { index, reason }),
        }
    }
}

/// Empty a cell's `outputs` array in place if it has any entries.
///
/// The key keeps its position in the cell; no other key is touched.
pub fn clear_cell_outputs(cell: &mut Value) -> CellOutcome {
    let Some(fields) = cell.as_object_mut() else {
        return CellOutcome::Skipped(SkipReason::CellNotObject);
    };
    match fields.get_mut(OUTPUTS_KEY) {
        None | Some(Value::Null) => CellOutcome::Clean,
        Some(Value::Array(outputs)) if outputs.is_empty() => CellOutcome::Clean,
        Some(Value::Array(outputs)) => {
            let removed = outputs.len();
            outputs.clear();
            CellOutcome::Cleared { removed }
        }
        Some(_) => CellOutcome::Skipped(SkipReason::OutputsNotArray),
    }
}

/// Apply [`clear_cell_outputs`] to every cell of a notebook document.
///
/// Fails only when the document has no `cells` array to work on; in that case
/// the document is not modified.
pub fn clear_notebook(document: &mut Value) -> Result<Cleanup, DocumentError> {
    let cells = document
        .as_object_mut()
        .ok_or(DocumentError::NotAnObject)?
        .get_mut(CELLS_KEY)
        .ok_or(DocumentError::MissingCells)?
        .as_array_mut()
        .ok_or(DocumentError::CellsNotArray)?;

    let mut cleanup = Cleanup::default();
    for (index, cell) in cells.iter_mut().enumerate() {
        cleanup.record(index, clear_cell_outputs(cell));
    }
    Ok(cleanup)
}
