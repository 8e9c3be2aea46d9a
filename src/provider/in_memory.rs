use std::collections::BTreeMap;

use crate::student::{StudentLookup, StudentRecord};

use super::StudentProvider;

/// In-memory implementation of StudentProvider.
///
/// Stands in for the student-records database; also the test double of choice.
#[derive(Debug, Clone)]
pub struct InMemoryStudentProvider {
    records: BTreeMap<String, StudentRecord>,
}

impl Default for InMemoryStudentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStudentProvider {
    /// Create a new empty InMemoryStudentProvider.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Create a new InMemoryStudentProvider with pre-populated records.
    ///
    /// Later records replace earlier ones with the same code.
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            map.insert(record.id.clone(), record);
        }
        Self { records: map }
    }

    /// The five reference students shipped with the tool.
    pub fn reference() -> Self {
        Self::with_records(reference_records())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Known student codes in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl StudentProvider for InMemoryStudentProvider {
    fn lookup(&self, id: &str) -> StudentLookup {
        self.records.get(id).cloned().into()
    }
}

fn record(id: &str, name: &str, average: f64, payment_made: bool) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        enrolled: true,
        average,
        welfare_clear: true,
        payment_made,
    }
}

/// Reference student data.
pub fn reference_records() -> Vec<StudentRecord> {
    vec![
        record("20210001", "Ana Martínez", 4.2, true),
        record("20210002", "Carlos Gutiérrez", 3.8, true),
        record("20210003", "María López", 3.7, true),
        // below the minimum average
        record("20210004", "Juan Rodríguez", 3.2, true),
        // graduation fee unpaid
        record("20210005", "Pedro Sánchez", 3.6, false),
    ]
}
