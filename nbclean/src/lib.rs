//! Strip cached execution outputs from notebook files.
//!
//! nbclean walks a directory tree, clears every non-empty `outputs` array in
//! each notebook's cells, and rewrites a notebook only when something was
//! cleared. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (the output-clearing rule).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, tree walk, notebook
//!   load/save).
//!
//! [`clean`] coordinates core logic with I/O; [`report`] is the seam for
//! everything a run prints.

pub mod clean;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
