//! Tokenization and the non-decreasing scan.
//!
//! Tokens are maximal runs of non-whitespace characters. A token that does
//! not parse as a base-10 signed integer is skipped without affecting the
//! count or the outcome.

use crate::core::types::{CheckOutcome, Violation};

/// Parse a token as a base-10 signed integer.
///
/// Accepts an optional leading `+`/`-`. Anything else (words, decimals,
/// values outside the `i64` range) yields `None`.
pub fn parse_token(token: &str) -> Option<i64> {
    token.parse().ok()
}

/// Scan `content` and verify its integers form a non-decreasing sequence.
///
/// Stops at the first decreasing pair. Equal consecutive values pass, and
/// the first accepted value always passes (there is no previous value yet).
pub fn scan_content(content: &str) -> CheckOutcome {
    let mut previous: Option<i64> = None;
    let mut count = 0usize;

    for token in content.split_whitespace() {
        let Some(value) = parse_token(token) else {
            continue;
        };
        if let Some(prev) = previous {
            if value < prev {
                return CheckOutcome::Violation(Violation {
                    previous: prev,
                    current: value,
                });
            }
        }
        previous = Some(value);
        count += 1;
    }

    CheckOutcome::Ok { count }
}
