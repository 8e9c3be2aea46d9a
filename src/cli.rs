//! CLI argument definitions for gradcheck.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradcheck")]
#[command(version)]
#[command(about = "Graduation requirement validation", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    gradcheck check 20210001        Check one student against the requirements\n    gradcheck report                Validate every code in students.txt and write graduation_report.csv\n\n    Settings are read from .gradcheck/config.md when present."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of .gradcheck/config.md
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Defaults to `report` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check students against the graduation requirements
    Check {
        /// Student codes
        #[arg(required = true, value_name = "CODE")]
        codes: Vec<String>,
        /// Minimum passing average (overrides config)
        #[arg(long, value_name = "AVERAGE")]
        min_average: Option<f64>,
        /// Student roster file (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        roster: Option<PathBuf>,
        /// Print decisions as JSON instead of text reports
        #[arg(long)]
        json: bool,
    },
    /// Validate a list of students and write a batch report
    Report {
        /// File with one student code per line (default: students.txt)
        #[arg(long, value_name = "FILE")]
        students: Option<PathBuf>,
        /// Output file (default: graduation_report.csv)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Output format (csv, json, markdown)
        #[arg(long)]
        format: Option<String>,
        /// Minimum passing average (overrides config)
        #[arg(long, value_name = "AVERAGE")]
        min_average: Option<f64>,
        /// Student roster file (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        roster: Option<PathBuf>,
        /// Print the report to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the students known to the roster
    Students {
        /// Student roster file (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        roster: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
}
