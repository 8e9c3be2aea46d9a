//! Graduation requirement validation.
//!
//! [`GraduationValidator`] asks a [`StudentProvider`] one question per
//! requirement and folds the answers into a [`GraduationDecision`]. Every
//! operation is total: unknown students simply fail every requirement.

use anyhow::Result;

use crate::config::{check_min_average, ValidationConfig, DEFAULT_MIN_AVERAGE};
use crate::provider::StudentProvider;
use crate::requirement::{GraduationDecision, RequirementSet};

/// Evaluates the graduation requirements for students of a provider.
#[derive(Debug, Clone)]
pub struct GraduationValidator<P> {
    provider: P,
    min_average: f64,
}

impl<P: StudentProvider> GraduationValidator<P> {
    /// Create a validator with the default minimum average (3.5).
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            min_average: DEFAULT_MIN_AVERAGE,
        }
    }

    /// Create a validator with a custom minimum average.
    ///
    /// Fails if the threshold is not a finite value on the grading scale.
    pub fn with_min_average(provider: P, min_average: f64) -> Result<Self> {
        check_min_average(min_average)?;
        Ok(Self {
            provider,
            min_average,
        })
    }

    pub fn from_config(provider: P, config: &ValidationConfig) -> Result<Self> {
        Self::with_min_average(provider, config.min_average)
    }

    pub fn min_average(&self) -> f64 {
        self.min_average
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn check_enrollment(&self, student_code: &str) -> bool {
        self.provider.is_enrolled(student_code)
    }

    /// Passes when the average is at or above the threshold.
    pub fn check_academic_average(&self, student_code: &str) -> bool {
        self.provider.academic_average(student_code) >= self.min_average
    }

    pub fn check_welfare_clearance(&self, student_code: &str) -> bool {
        self.provider.has_welfare_clearance(student_code)
    }

    pub fn check_payment_cleared(&self, student_code: &str) -> bool {
        self.provider.has_payment_cleared(student_code)
    }

    /// Evaluate all four requirements and combine them.
    ///
    /// Every check runs even after an earlier one fails; callers rely on the
    /// full detail map.
    pub fn validate_graduation_requirements(&self, student_code: &str) -> GraduationDecision {
        let enrolled = self.check_enrollment(student_code);
        let minimum_average = self.check_academic_average(student_code);
        let welfare_clearance = self.check_welfare_clearance(student_code);
        let payment_cleared = self.check_payment_cleared(student_code);

        let requirements = RequirementSet::from_outcomes(
            enrolled,
            minimum_average,
            welfare_clearance,
            payment_cleared,
        );
        let decision = GraduationDecision::new(requirements);

        tracing::debug!(
            student = student_code,
            enrolled,
            minimum_average,
            welfare_clearance,
            payment_cleared,
            overall_pass = decision.overall_pass(),
            "evaluated graduation requirements"
        );

        decision
    }

    /// Human-readable summary of the decision for one student.
    pub fn generate_graduation_report(&self, student_code: &str) -> String {
        let decision = self.validate_graduation_requirements(student_code);
        format_decision(student_code, &decision)
    }
}

/// Render a decision as the plain-text graduation report.
pub fn format_decision(student_code: &str, decision: &GraduationDecision) -> String {
    let mut message = if decision.overall_pass() {
        format!(
            "Student {} MEETS all graduation requirements.",
            student_code
        )
    } else {
        format!(
            "Student {} does NOT meet all graduation requirements.",
            student_code
        )
    };

    message.push_str("\n\nRequirement details:");

    for (requirement, met) in decision.requirements().iter() {
        let status = if met { "PASS" } else { "FAIL" };
        message.push_str(&format!("\n- {}: {}", requirement.label(), status));
    }

    message
}

/// Validate one student with default settings and return the text report.
pub fn validate_student_graduation<P: StudentProvider>(provider: P, student_code: &str) -> String {
    GraduationValidator::new(provider).generate_graduation_report(student_code)
}
