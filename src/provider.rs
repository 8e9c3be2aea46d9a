//! Student data provider abstraction.
//!
//! The validator only needs five lookups keyed by student code. Backends
//! implement [`StudentProvider::lookup`] and get the rest for free; a backend
//! that can answer individual questions more cheaply (a database issuing one
//! query per attribute, for example) may override any of them.
//!
//! Every lookup must be idempotent and free of observable side effects.

use crate::student::{StudentLookup, StudentRecord};

pub mod file;
pub mod in_memory;

pub use file::FileStudentProvider;
pub use in_memory::InMemoryStudentProvider;

/// Read-only access to student records.
pub trait StudentProvider {
    /// Fetch the record for a student code.
    fn lookup(&self, id: &str) -> StudentLookup;

    /// Whether the student is enrolled. `false` for unknown students.
    fn is_enrolled(&self, id: &str) -> bool {
        self.record(id).enrolled
    }

    /// The student's academic average. `0.0` for unknown students.
    fn academic_average(&self, id: &str) -> f64 {
        self.record(id).average
    }

    /// Whether university welfare has cleared the student. `false` for unknown students.
    fn has_welfare_clearance(&self, id: &str) -> bool {
        self.record(id).welfare_clear
    }

    /// Whether the graduation fee has been paid. `false` for unknown students.
    fn has_payment_cleared(&self, id: &str) -> bool {
        self.record(id).payment_made
    }

    /// Display name, or [`UNKNOWN_STUDENT_NAME`](crate::student::UNKNOWN_STUDENT_NAME).
    fn display_name(&self, id: &str) -> String {
        self.record(id).name
    }

    /// Lookup with the not-found defaults applied.
    fn record(&self, id: &str) -> StudentRecord {
        let lookup = self.lookup(id);
        if !lookup.is_found() {
            tracing::debug!(student = id, "student not found, using empty defaults");
        }
        lookup.into_record(id)
    }
}

impl<P: StudentProvider + ?Sized> StudentProvider for &P {
    fn lookup(&self, id: &str) -> StudentLookup {
        (**self).lookup(id)
    }

    fn is_enrolled(&self, id: &str) -> bool {
        (**self).is_enrolled(id)
    }

    fn academic_average(&self, id: &str) -> f64 {
        (**self).academic_average(id)
    }

    fn has_welfare_clearance(&self, id: &str) -> bool {
        (**self).has_welfare_clearance(id)
    }

    fn has_payment_cleared(&self, id: &str) -> bool {
        (**self).has_payment_cleared(id)
    }

    fn display_name(&self, id: &str) -> String {
        (**self).display_name(id)
    }
}

impl<P: StudentProvider + ?Sized> StudentProvider for Box<P> {
    fn lookup(&self, id: &str) -> StudentLookup {
        (**self).lookup(id)
    }

    fn is_enrolled(&self, id: &str) -> bool {
        (**self).is_enrolled(id)
    }

    fn academic_average(&self, id: &str) -> f64 {
        (**self).academic_average(id)
    }

    fn has_welfare_clearance(&self, id: &str) -> bool {
        (**self).has_welfare_clearance(id)
    }

    fn has_payment_cleared(&self, id: &str) -> bool {
        (**self).has_payment_cleared(id)
    }

    fn display_name(&self, id: &str) -> String {
        (**self).display_name(id)
    }
}
