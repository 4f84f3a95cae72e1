//! I/O helpers for a cleaning run.

pub mod config;
pub mod notebook_store;
pub mod walk;
