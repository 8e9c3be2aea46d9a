//! End-to-end CLI runs

use crate::common::{stderr_of, stdout_of};
use crate::support::fixtures::REFERENCE_ROSTER_YAML;
use crate::support::harness::TestHarness;

#[test]
fn test_check_passing_student() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "20210001"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Student 20210001 MEETS all graduation requirements."));
    assert_eq!(stdout.matches(": PASS").count(), 4);
}

#[test]
fn test_check_failing_student_exits_nonzero() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "20210005"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("does NOT meet"));
    assert!(stdout.contains("- Payment Cleared: FAIL"));
    assert!(stdout.contains("- Minimum Average: PASS"));
}

#[test]
fn test_check_unknown_student_is_not_an_error() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "00000000"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).matches(": FAIL").count(), 4);
}

#[test]
fn test_check_min_average_override() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "20210004", "--min-average", "3.0"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
}

#[test]
fn test_check_rejects_out_of_scale_threshold() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "20210001", "--min-average", "12"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("min_average"));
}

#[test]
fn test_check_json_output() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "20210004", "20210001", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value[0]["code"], "20210004");
    assert_eq!(value[0]["overall_pass"], false);
    assert_eq!(value[0]["requirements"]["minimum-average"], false);
    assert_eq!(value[1]["code"], "20210001");
    assert_eq!(value[1]["overall_pass"], true);
}

#[test]
fn test_report_writes_csv() {
    let harness = TestHarness::new();
    harness.write_students(&["20210001", "20210002", "20210003", "20210004", "20210005"]);

    let output = harness.run(&["report"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Validated 5 student(s): 3 approved, 2 rejected"));
    let csv = harness.read("graduation_report.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Code,Name,Enrolled,Minimum Average,Welfare Clearance,Payment Cleared,Result"
    );
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[4], "20210004,Juan Rodríguez,Yes,No,Yes,Yes,REJECTED");
    assert_eq!(lines[5], "20210005,Pedro Sánchez,Yes,Yes,Yes,No,REJECTED");
}

#[test]
fn test_default_command_is_report() {
    let harness = TestHarness::new();
    harness.write_students(&["20210001"]);

    let output = harness.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(harness.read("graduation_report.csv").contains("20210001,Ana Martínez"));
}

#[test]
fn test_report_missing_students_file() {
    let harness = TestHarness::new();
    let output = harness.run(&["report"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("students.txt"));
}

#[test]
fn test_report_stdout_markdown() {
    let harness = TestHarness::new();
    harness.write_students(&["20210002"]);

    let output = harness.run(&["report", "--stdout", "--format", "markdown"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output)
        .contains("| 20210002 | Carlos Gutiérrez | Yes | Yes | Yes | Yes | APPROVED |"));
    assert!(!harness.path().join("graduation_report.csv").exists());
}

#[test]
fn test_report_unknown_format() {
    let harness = TestHarness::new();
    harness.write_students(&["20210002"]);
    let output = harness.run(&["report", "--format", "xlsx"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Unknown format"));
}

#[test]
fn test_report_uses_config_and_roster() {
    let harness = TestHarness::new();
    harness.write("data/students.yaml", REFERENCE_ROSTER_YAML);
    harness.write("input/codes.txt", "20210004\n20210005\n");
    harness.write_config(
        "validation:\n  min_average: 3.0\nreport:\n  students_file: input/codes.txt\n  output: out/report.json\n  format: json\nroster: data/students.yaml\n",
    );

    let output = harness.run(&["report", "--quiet"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).is_empty());
    let value: serde_json::Value = serde_json::from_str(&harness.read("out/report.json")).unwrap();
    // 3.2 clears a 3.0 threshold
    assert_eq!(value[0]["overall_pass"], true);
    assert_eq!(value[1]["overall_pass"], false);
    assert_eq!(value[1]["requirements"]["payment-cleared"], false);
}

#[test]
fn test_invalid_config_is_reported() {
    let harness = TestHarness::new();
    harness.write_config("validation:\n  min_average: -2\n");
    let output = harness.run(&["check", "20210001"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Invalid config"));
}

#[test]
fn test_explicit_config_flag() {
    let harness = TestHarness::new();
    harness.write("custom.md", "---\nvalidation:\n  min_average: 4.5\n---\n");
    let output = harness.run(&["--config", "custom.md", "check", "20210001"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("- Minimum Average: FAIL"));
}

#[test]
fn test_students_lists_reference_data() {
    let harness = TestHarness::new();
    let output = harness.run(&["students"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Students (5)"));
    assert!(stdout.contains("20210003  María López"));
}

#[test]
fn test_students_with_missing_roster() {
    let harness = TestHarness::new();
    let output = harness.run(&["students", "--roster", "nope.yaml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read student roster"));
}

#[test]
fn test_version() {
    let harness = TestHarness::new();
    let output = harness.run(&["version", "--verbose"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("gradcheck "));
    assert!(stdout.contains("commit: "));
}
