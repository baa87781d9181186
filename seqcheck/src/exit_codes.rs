//! Stable exit codes for the seqcheck CLI.

/// No violation found (including the empty-sequence case).
pub const OK: i32 = 0;
/// A decreasing pair was found and reported on stdout.
pub const VIOLATION: i32 = 1;
/// The input file could not be read, or another unrecovered error.
pub const INVALID: i32 = 2;
