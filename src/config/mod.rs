//! Configuration management for gradcheck.
//!
//! Configuration lives in a markdown file whose YAML frontmatter carries the
//! settings; the body is free-form notes. Every field has a default, so an
//! absent project config is equivalent to an empty one.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;
pub use validation::*;

/// Default project config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".gradcheck/config.md";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// Student roster file; the built-in reference data is used when unset
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

impl Config {
    /// Load `.gradcheck/config.md` if present, otherwise the defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!("no project config at {}, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Load an explicitly named config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An all-comment or empty frontmatter deserializes to null
        let config: Option<Config> =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;
        let config = config.unwrap_or_default();

        config.validate()?;

        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.validation.validate()
    }
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
