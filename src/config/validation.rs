//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{ValidationConfig, GRADE_SCALE_MAX, GRADE_SCALE_MIN};

/// Check that a minimum-average threshold is usable.
///
/// The threshold must be a finite number on the grading scale.
pub fn check_min_average(min_average: f64) -> Result<()> {
    if !min_average.is_finite() {
        anyhow::bail!("validation.min_average must be a finite number, got {}", min_average);
    }

    if !(GRADE_SCALE_MIN..=GRADE_SCALE_MAX).contains(&min_average) {
        anyhow::bail!(
            "validation.min_average must be between {} and {}, got {}",
            GRADE_SCALE_MIN,
            GRADE_SCALE_MAX,
            min_average
        );
    }

    Ok(())
}

impl ValidationConfig {
    /// Validate requirement settings
    pub fn validate(&self) -> Result<()> {
        check_min_average(self.min_average)
    }
}
