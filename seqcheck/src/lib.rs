//! Non-decreasing sequence checker.
//!
//! Validates that a text file contains a non-decreasing sequence of integers,
//! reporting either the first out-of-order pair or the count of valid numbers
//! parsed. Tokens that do not parse as integers are skipped silently; this is
//! a deliberate tolerance policy, not an error condition.
//!
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (tokenization, the scan).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (reading the input file).
//!
//! [`check`] coordinates core logic with I/O to implement the CLI command.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
