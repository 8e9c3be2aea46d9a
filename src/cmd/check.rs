//! `gradcheck check`: per-student graduation reports.

use anyhow::Result;
use std::path::Path;

use gradcheck::config::Config;
use gradcheck::report::{self, ReportFormat};
use gradcheck::ui;
use gradcheck::validator::format_decision;

use super::build_validator;

/// Print a report for each code. Returns whether every student passed.
pub fn cmd_check(
    config: &Config,
    codes: &[String],
    roster: Option<&Path>,
    min_average: Option<f64>,
    json: bool,
) -> Result<bool> {
    let validator = build_validator(config, roster, min_average)?;
    let mut all_pass = true;

    if json {
        let rows = report::build_rows(&validator, codes);
        println!("{}", report::render(&rows, ReportFormat::Json)?);
        return Ok(rows.iter().all(|row| row.overall_pass()));
    }

    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            println!("\n{}", ui::format::separator(40));
        }
        let decision = validator.validate_graduation_requirements(code);
        all_pass &= decision.overall_pass();
        let text = format_decision(code, &decision);
        println!("{}", ui::colorize_report(&text));
    }

    Ok(all_pass)
}
