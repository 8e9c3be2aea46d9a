use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::student::{StudentLookup, StudentRecord};

use super::{InMemoryStudentProvider, StudentProvider};

/// On-disk roster layout: a top-level `students` list.
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    students: Vec<StudentRecord>,
}

/// File-based implementation of StudentProvider.
///
/// The whole roster is read once at construction time. Read or parse failures
/// surface from [`FileStudentProvider::load`]; lookups afterwards cannot fail.
#[derive(Debug, Clone)]
pub struct FileStudentProvider {
    path: PathBuf,
    records: InMemoryStudentProvider,
}

impl FileStudentProvider {
    /// Load a roster from a YAML (`.yaml`/`.yml`, the default) or JSON (`.json`) file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read student roster from {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let roster: RosterFile = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse roster JSON: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse roster YAML: {}", path.display()))?
        };

        let mut seen = HashSet::new();
        for student in &roster.students {
            if !seen.insert(student.id.as_str()) {
                bail!(
                    "Duplicate student code '{}' in roster {}",
                    student.id,
                    path.display()
                );
            }
        }

        tracing::debug!(
            path = %path.display(),
            students = roster.students.len(),
            "loaded student roster"
        );

        Ok(Self {
            path: path.to_path_buf(),
            records: InMemoryStudentProvider::with_records(roster.students),
        })
    }

    /// Get the roster file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Known student codes in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.ids()
    }
}

impl StudentProvider for FileStudentProvider {
    fn lookup(&self, id: &str) -> StudentLookup {
        self.records.lookup(id)
    }
}
