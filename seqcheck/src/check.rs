//! Orchestration for the `seqcheck` command: read the file, run the scan,
//! render the single report line.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::core::scan::scan_content;
use crate::core::types::CheckOutcome;
use crate::io::source::read_content;

/// Check the file at `path` for a non-decreasing integer sequence.
///
/// File-access failures propagate; a decreasing pair is not an error but a
/// [`CheckOutcome::Violation`].
pub fn check_file(path: &Path) -> Result<CheckOutcome> {
    let content = read_content(path)?;
    debug!(path = %path.display(), bytes = content.len(), "scanning input");
    let outcome = scan_content(&content);
    debug!(?outcome, "scan finished");
    Ok(outcome)
}

/// Render the product output line for an outcome.
pub fn render(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Ok { count } => format!("All is ok ({count} nums)"),
        CheckOutcome::Violation(violation) => {
            format!(
                "Error on numbers {} {}",
                violation.previous, violation.current
            )
        }
    }
}
