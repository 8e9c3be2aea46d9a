//! Reading the list of student codes to report on.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read student codes from a text file, one per line.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn read_student_codes(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read student codes from {}", path.display()))?;

    Ok(parse_student_codes(&content))
}

pub fn parse_student_codes(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
