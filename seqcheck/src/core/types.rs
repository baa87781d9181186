//! Outcome types for the non-decreasing scan.

/// First out-of-order pair found in the numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Last value accepted before the offending one.
    pub previous: i64,
    /// The value that broke the order.
    pub current: i64,
}

/// Result of scanning a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every parsed integer was greater than or equal to its predecessor.
    Ok {
        /// Number of valid integers accepted.
        count: usize,
    },
    /// The scan stopped at the first decreasing pair.
    Violation(Violation),
}
