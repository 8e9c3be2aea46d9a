use gradcheck::student::StudentRecord;

/// Builds student records that satisfy every requirement unless told otherwise.
pub struct StudentRecordBuilder {
    record: StudentRecord,
}

impl StudentRecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: StudentRecord {
                id: id.to_string(),
                name: format!("Student {}", id),
                enrolled: true,
                average: 4.0,
                welfare_clear: true,
                payment_made: true,
            },
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn with_enrolled(mut self, enrolled: bool) -> Self {
        self.record.enrolled = enrolled;
        self
    }

    pub fn with_average(mut self, average: f64) -> Self {
        self.record.average = average;
        self
    }

    pub fn with_welfare_clear(mut self, welfare_clear: bool) -> Self {
        self.record.welfare_clear = welfare_clear;
        self
    }

    pub fn with_payment_made(mut self, payment_made: bool) -> Self {
        self.record.payment_made = payment_made;
        self
    }

    pub fn build(self) -> StudentRecord {
        self.record
    }
}
