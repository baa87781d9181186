//! Input file access.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the input file fully into memory as UTF-8 text.
///
/// The handle is scoped to the read and released before this returns.
/// Missing or unreadable files propagate as errors with the path attached.
pub fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InputDir;

    #[test]
    fn read_returns_file_contents() {
        let dir = InputDir::new().expect("tempdir");
        let path = dir.write("input.txt", "1 2 3\n").expect("write input");

        let content = read_content(&path).expect("read");
        assert_eq!(content, "1 2 3\n");
    }

    #[test]
    fn read_errors_on_missing_file() {
        let dir = InputDir::new().expect("tempdir");
        let missing = dir.path().join("nope.txt");

        let err = read_content(&missing).expect_err("read should fail");
        assert!(err.to_string().contains("nope.txt"));
    }
}
