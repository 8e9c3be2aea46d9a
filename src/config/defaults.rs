//! Default values and configuration structs with default implementations.

use serde::Deserialize;
use std::path::PathBuf;

use crate::report::ReportFormat;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Minimum passing average when nothing else is configured.
pub const DEFAULT_MIN_AVERAGE: f64 = 3.5;

/// Lowest value on the grading scale.
pub const GRADE_SCALE_MIN: f64 = 0.0;

/// Highest value on the grading scale.
pub const GRADE_SCALE_MAX: f64 = 5.0;

default_fn!(default_min_average, f64, DEFAULT_MIN_AVERAGE);
default_fn!(default_students_file, PathBuf, PathBuf::from("students.txt"));
default_fn!(
    default_report_output,
    PathBuf,
    PathBuf::from("graduation_report.csv")
);

/// Requirement evaluation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Minimum academic average, inclusive (default: 3.5)
    #[serde(default = "default_min_average")]
    pub min_average: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_average: default_min_average(),
        }
    }
}

/// Batch report settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// File listing one student code per line (default: students.txt)
    #[serde(default = "default_students_file")]
    pub students_file: PathBuf,
    /// Where the report is written (default: graduation_report.csv)
    #[serde(default = "default_report_output")]
    pub output: PathBuf,
    /// Output format (default: csv)
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            output: default_report_output(),
            format: ReportFormat::default(),
        }
    }
}
