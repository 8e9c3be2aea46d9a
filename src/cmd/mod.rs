//! Command module structure for gradcheck CLI

use anyhow::Result;
use std::path::Path;

use gradcheck::config::Config;
use gradcheck::provider::{FileStudentProvider, InMemoryStudentProvider, StudentProvider};
use gradcheck::validator::GraduationValidator;

pub mod check;
pub mod report;
pub mod students;
pub mod util;

/// Provider chosen for a run: a roster file when one is configured, the
/// reference records otherwise.
pub type RunProvider = Box<dyn StudentProvider>;

/// Load the config named on the command line, or the project default.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Open the student provider. The command-line roster wins over the config.
pub fn open_provider(config: &Config, roster: Option<&Path>) -> Result<RunProvider> {
    match roster.or(config.roster.as_deref()) {
        Some(path) => Ok(Box::new(FileStudentProvider::load(path)?)),
        None => {
            tracing::debug!("no roster configured, using reference student records");
            Ok(Box::new(InMemoryStudentProvider::reference()))
        }
    }
}

/// Build the validator for a run, applying a command-line threshold override.
pub fn build_validator(
    config: &Config,
    roster: Option<&Path>,
    min_average: Option<f64>,
) -> Result<GraduationValidator<RunProvider>> {
    let provider = open_provider(config, roster)?;
    let min_average = min_average.unwrap_or(config.validation.min_average);
    GraduationValidator::with_min_average(provider, min_average)
}
