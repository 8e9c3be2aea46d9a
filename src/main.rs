//! CLI entry point for gradcheck.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use cmd::report::ReportOptions;

/// Environment variable holding the log filter (e.g. `debug`, `gradcheck=trace`).
const LOG_ENV: &str = "GRADCHECK_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            std::process::exit(2);
        }
    }
}

/// Returns `false` when a checked student does not meet the requirements.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let quiet = cli.quiet || gradcheck::ui::is_quiet();

    if let Some(Commands::Version { verbose }) = cli.command {
        cmd::util::cmd_version(verbose)?;
        return Ok(true);
    }

    let config = cmd::load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Check {
            codes,
            min_average,
            roster,
            json,
        }) => cmd::check::cmd_check(&config, &codes, roster.as_deref(), min_average, json),
        Some(Commands::Report {
            students,
            output,
            format,
            min_average,
            roster,
            stdout,
        }) => {
            cmd::report::cmd_report(
                &config,
                ReportOptions {
                    students,
                    output,
                    format,
                    min_average,
                    roster,
                    stdout,
                    quiet,
                },
            )?;
            Ok(true)
        }
        Some(Commands::Students { roster }) => {
            cmd::students::cmd_students(&config, roster.as_deref(), quiet)?;
            Ok(true)
        }
        Some(Commands::Version { .. }) => Ok(true),
        None => {
            if !quiet {
                println!("{}", "Graduation Requirement Validation".bold());
                println!("{}", gradcheck::ui::format::separator(33));
            }
            cmd::report::cmd_report(
                &config,
                ReportOptions {
                    quiet,
                    ..ReportOptions::default()
                },
            )?;
            Ok(true)
        }
    }
}
