//! Stable exit codes for the nbclean CLI.

/// Traversal completed. Per-file failures do not change the exit code.
pub const OK: i32 = 0;
/// Missing/invalid root argument or invalid config; nothing was traversed.
pub const INVALID: i32 = 1;
