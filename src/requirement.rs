//! The fixed set of graduation requirements and the decision built from them.
//!
//! Requirements are always evaluated and reported in canonical order:
//! enrollment, minimum average, welfare clearance, payment.

use anyhow::{anyhow, Result};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the four graduation conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Student is currently enrolled
    Enrolled,
    /// Academic average at or above the configured threshold
    MinimumAverage,
    /// Cleared by university welfare
    WelfareClearance,
    /// Graduation fee paid
    PaymentCleared,
}

impl Requirement {
    /// All requirements in canonical display order.
    pub const ALL: [Requirement; 4] = [
        Requirement::Enrolled,
        Requirement::MinimumAverage,
        Requirement::WelfareClearance,
        Requirement::PaymentCleared,
    ];

    /// Machine name used as the detail map key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Enrolled => "enrolled",
            Self::MinimumAverage => "minimum-average",
            Self::WelfareClearance => "welfare-clearance",
            Self::PaymentCleared => "payment-cleared",
        }
    }

    /// Human-readable label: separators become spaces and each word is capitalized.
    pub fn label(self) -> String {
        self.name()
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn index(self) -> usize {
        match self {
            Self::Enrolled => 0,
            Self::MinimumAverage => 1,
            Self::WelfareClearance => 2,
            Self::PaymentCleared => 3,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Requirement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Requirement::ALL
            .into_iter()
            .find(|req| req.name() == s)
            .ok_or_else(|| anyhow!("Unknown requirement: {}", s))
    }
}

/// Outcome of every requirement, always exactly the four of [`Requirement::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementSet {
    outcomes: [bool; 4],
}

impl RequirementSet {
    /// Build from outcomes given in canonical order.
    pub fn from_outcomes(
        enrolled: bool,
        minimum_average: bool,
        welfare_clearance: bool,
        payment_cleared: bool,
    ) -> Self {
        Self {
            outcomes: [enrolled, minimum_average, welfare_clearance, payment_cleared],
        }
    }

    pub fn get(&self, requirement: Requirement) -> bool {
        self.outcomes[requirement.index()]
    }

    /// Requirements paired with their outcome, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        Requirement::ALL
            .into_iter()
            .map(move |req| (req, self.get(req)))
    }

    pub fn all_met(&self) -> bool {
        self.outcomes.iter().all(|met| *met)
    }

    /// Requirements that were not met, in canonical order.
    pub fn failed(&self) -> Vec<Requirement> {
        self.iter()
            .filter(|(_, met)| !met)
            .map(|(req, _)| req)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for RequirementSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (req, met) in self.iter() {
            map.serialize_entry(req.name(), &met)?;
        }
        map.end()
    }
}

/// Overall graduation decision plus the per-requirement detail.
///
/// The overall result is derived from the requirement set on every call and
/// is never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraduationDecision {
    requirements: RequirementSet,
}

impl GraduationDecision {
    pub fn new(requirements: RequirementSet) -> Self {
        Self { requirements }
    }

    /// Logical AND of all four requirements.
    pub fn overall_pass(&self) -> bool {
        self.requirements.all_met()
    }

    pub fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }

    /// The `(overall_pass, requirements)` pair.
    pub fn into_parts(self) -> (bool, RequirementSet) {
        (self.overall_pass(), self.requirements)
    }
}

impl Serialize for GraduationDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GraduationDecision", 2)?;
        state.serialize_field("overall_pass", &self.overall_pass())?;
        state.serialize_field("requirements", &self.requirements)?;
        state.end()
    }
}
