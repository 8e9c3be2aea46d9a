//! Batch graduation reports.
//!
//! Builds one row per student (code, name, one cell per requirement, overall
//! result) and renders the rows as CSV, JSON or a Markdown table. Rows keep
//! the order in which the caller supplied the student codes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::provider::StudentProvider;
use crate::requirement::{GraduationDecision, Requirement};
use crate::validator::GraduationValidator;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    Markdown,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => anyhow::bail!(
                "Unknown format: {}. Supported formats: csv, json, markdown",
                s
            ),
        }
    }
}

/// One student's line in a batch report
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub decision: GraduationDecision,
}

impl ReportRow {
    pub fn overall_pass(&self) -> bool {
        self.decision.overall_pass()
    }
}

/// Validate every student code, in the given order.
pub fn build_rows<P, S>(validator: &GraduationValidator<P>, codes: &[S]) -> Vec<ReportRow>
where
    P: StudentProvider,
    S: AsRef<str>,
{
    codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            if !validator.provider().lookup(code).is_found() {
                tracing::warn!(student = code, "student code not found in records");
            }
            ReportRow {
                code: code.to_string(),
                name: validator.provider().display_name(code),
                decision: validator.validate_graduation_requirements(code),
            }
        })
        .collect()
}

/// Render rows in the requested format
pub fn render(rows: &[ReportRow], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Csv => Ok(render_csv(rows)),
        ReportFormat::Json => render_json(rows),
        ReportFormat::Markdown => Ok(render_markdown(rows)),
    }
}

/// Write a rendered report, creating parent directories as needed
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    tracing::info!(path = %path.display(), "graduation report written");
    Ok(())
}

/// Column headers shared by the tabular formats
fn column_headers() -> Vec<String> {
    let mut headers = vec!["Code".to_string(), "Name".to_string()];
    headers.extend(Requirement::ALL.iter().map(|req| req.label()));
    headers.push("Result".to_string());
    headers
}

fn yes_no(met: bool) -> &'static str {
    if met {
        "Yes"
    } else {
        "No"
    }
}

fn result_text(pass: bool) -> &'static str {
    if pass {
        "APPROVED"
    } else {
        "REJECTED"
    }
}

fn row_cells(row: &ReportRow) -> Vec<String> {
    let mut cells = vec![row.code.clone(), row.name.clone()];
    cells.extend(
        row.decision
            .requirements()
            .iter()
            .map(|(_, met)| yes_no(met).to_string()),
    );
    cells.push(result_text(row.overall_pass()).to_string());
    cells
}

fn render_json(rows: &[ReportRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

fn render_csv(rows: &[ReportRow]) -> String {
    let mut output = String::new();

    output.push_str(&column_headers().join(","));
    output.push('\n');

    for row in rows {
        let values: Vec<String> = row_cells(row).iter().map(|v| csv_escape(v)).collect();
        output.push_str(&values.join(","));
        output.push('\n');
    }

    output
}

/// Escape a value for CSV output
fn csv_escape(value: &str) -> String {
    // If value contains comma, quote, or newline, wrap in quotes and escape quotes
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_markdown(rows: &[ReportRow]) -> String {
    let headers = column_headers();
    let mut output = String::new();

    output.push('|');
    for header in &headers {
        output.push(' ');
        output.push_str(header);
        output.push_str(" |");
    }
    output.push('\n');

    output.push('|');
    for _ in &headers {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in rows {
        output.push('|');
        for cell in row_cells(row) {
            output.push(' ');
            output.push_str(&cell.replace('|', "\\|"));
            output.push_str(" |");
        }
        output.push('\n');
    }

    output
}
