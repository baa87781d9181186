//! Pure, deterministic logic for the checker.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests.

pub mod scan;
pub mod types;
