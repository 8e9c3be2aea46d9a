//! Student records as seen by the graduation checks.
//!
//! A record is a read-only snapshot fetched per query. Lookups that miss are
//! represented explicitly by [`StudentLookup::NotFound`] and mapped to the
//! all-false/zero record at the provider boundary, so the validator never has
//! to reason about absence.

use serde::{Deserialize, Serialize};

/// Display name used for identifiers the provider does not know.
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown";

/// Attributes of a single student relevant to graduation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student code (opaque, no required format)
    pub id: String,
    /// Display name used by reports
    #[serde(default = "default_name")]
    pub name: String,
    /// Currently enrolled
    #[serde(default)]
    pub enrolled: bool,
    /// Academic average on the 0.0-5.0 scale
    #[serde(default)]
    pub average: f64,
    /// Cleared by university welfare
    #[serde(default)]
    pub welfare_clear: bool,
    /// Graduation fee paid
    #[serde(default)]
    pub payment_made: bool,
}

fn default_name() -> String {
    UNKNOWN_STUDENT_NAME.to_string()
}

impl StudentRecord {
    /// The record every unknown identifier resolves to.
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: default_name(),
            enrolled: false,
            average: 0.0,
            welfare_clear: false,
            payment_made: false,
        }
    }
}

/// Outcome of asking a provider for a student.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentLookup {
    Found(StudentRecord),
    NotFound,
}

impl StudentLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Resolve to a record, substituting the all-false/zero defaults on a miss.
    pub fn into_record(self, id: &str) -> StudentRecord {
        match self {
            Self::Found(record) => record,
            Self::NotFound => StudentRecord::unknown(id),
        }
    }
}

impl From<Option<StudentRecord>> for StudentLookup {
    fn from(record: Option<StudentRecord>) -> Self {
        match record {
            Some(record) => Self::Found(record),
            None => Self::NotFound,
        }
    }
}
