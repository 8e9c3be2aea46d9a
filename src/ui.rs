//! Centralized UI formatting and color utilities
//!
//! Colors and markers used by the gradcheck CLI. Library rendering (text,
//! CSV, JSON, Markdown reports) stays uncolored; coloring is applied only to
//! terminal output.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("GRADCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored PASS/FAIL marker.
pub fn pass_fail(met: bool) -> ColoredString {
    if met {
        "PASS".green()
    } else {
        "FAIL".red()
    }
}

/// Returns a colored icon for an outcome.
///
/// Icons:
/// - met: ● (green)
/// - not met: ✗ (red)
pub fn outcome_icon(met: bool) -> ColoredString {
    if met {
        "●".green()
    } else {
        "✗".red()
    }
}

/// Color a plain-text graduation report for the terminal.
///
/// Only the trailing PASS/FAIL markers of detail lines and the header's
/// verdict are colored; the text itself is unchanged.
pub fn colorize_report(report: &str) -> String {
    report
        .lines()
        .map(|line| {
            if let Some(rest) = line.strip_suffix(": PASS") {
                format!("{}: {}", rest, pass_fail(true))
            } else if let Some(rest) = line.strip_suffix(": FAIL") {
                format!("{}: {}", rest, pass_fail(false))
            } else if line.contains(" MEETS ") {
                colors::success(line).bold().to_string()
            } else if line.contains(" does NOT meet ") {
                colors::error(line).bold().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (student codes)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
