//! `gradcheck report`: batch validation of a list of student codes.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use gradcheck::config::Config;
use gradcheck::report::{self, ReportFormat};
use gradcheck::roster::read_student_codes;
use gradcheck::ui;

use super::build_validator;

/// Options for a batch report run; unset fields fall back to the config.
#[derive(Debug, Default)]
pub struct ReportOptions {
    pub students: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub min_average: Option<f64>,
    pub roster: Option<PathBuf>,
    pub stdout: bool,
    pub quiet: bool,
}

pub fn cmd_report(config: &Config, options: ReportOptions) -> Result<()> {
    let format = match options.format.as_deref() {
        Some(format) => format.parse::<ReportFormat>()?,
        None => config.report.format,
    };
    let students_file = options
        .students
        .unwrap_or_else(|| config.report.students_file.clone());

    let codes = read_student_codes(&students_file)?;
    let validator = build_validator(config, options.roster.as_deref(), options.min_average)?;
    let rows = report::build_rows(&validator, &codes);
    let contents = report::render(&rows, format)?;

    if options.stdout {
        print!("{}", contents);
        return Ok(());
    }

    let output = options
        .output
        .unwrap_or_else(|| config.report.output.clone());
    report::write_report(&output, &contents)?;

    if !options.quiet {
        let approved = rows.iter().filter(|row| row.overall_pass()).count();
        println!(
            "{} Validated {} student(s): {} approved, {} rejected",
            ui::outcome_icon(approved == rows.len()),
            rows.len(),
            approved.to_string().green(),
            (rows.len() - approved).to_string().red()
        );
        println!(
            "Report written to {}",
            ui::colors::identifier(&output.display().to_string())
        );
    }

    Ok(())
}
