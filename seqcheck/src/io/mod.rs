//! Side-effecting operations (filesystem access).
//!
//! Isolated from [`crate::core`] so the scan logic stays pure and testable
//! without touching the filesystem.

pub mod source;
