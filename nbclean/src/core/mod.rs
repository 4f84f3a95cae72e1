//! Deterministic, pure logic for notebook cleanup.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! JSON values and return deterministic outputs suitable for tests.

pub mod mutator;
