use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

use crate::common;

/// Isolated working directory for running the gradcheck binary.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the harness root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write_students(&self, codes: &[&str]) -> PathBuf {
        let mut content = codes.join("\n");
        content.push('\n');
        self.write("students.txt", &content)
    }

    pub fn write_config(&self, frontmatter: &str) -> PathBuf {
        self.write(
            ".gradcheck/config.md",
            &format!("---\n{}---\n\n# gradcheck config\n", frontmatter),
        )
    }

    pub fn run(&self, args: &[&str]) -> Output {
        common::run_gradcheck(self.dir.path(), args)
    }
}
