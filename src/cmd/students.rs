//! `gradcheck students`: list the students a roster knows about.

use anyhow::Result;
use std::path::Path;

use gradcheck::config::Config;
use gradcheck::provider::{FileStudentProvider, InMemoryStudentProvider, StudentProvider};
use gradcheck::ui;

pub fn cmd_students(config: &Config, roster: Option<&Path>, quiet: bool) -> Result<()> {
    let entries: Vec<(String, String)> = match roster.or(config.roster.as_deref()) {
        Some(path) => {
            let provider = FileStudentProvider::load(path)?;
            provider
                .ids()
                .map(|id| (id.to_string(), provider.display_name(id)))
                .collect()
        }
        None => {
            let provider = InMemoryStudentProvider::reference();
            provider
                .ids()
                .map(|id| (id.to_string(), provider.display_name(id)))
                .collect()
        }
    };

    if !quiet {
        println!("{}", ui::colors::heading(&format!("Students ({})", entries.len())));
        println!("{}", ui::format::separator(30));
    }

    if entries.is_empty() {
        if !quiet {
            println!("{}", ui::colors::secondary("  (no students)"));
        }
        return Ok(());
    }

    for (id, name) in entries {
        println!("  {}  {}", ui::colors::identifier(&id), name);
    }

    Ok(())
}
