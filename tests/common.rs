//! Common test helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn get_gradcheck_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gradcheck"))
}

/// Run the binary in `dir` with colors and quiet mode forced off.
pub fn run_gradcheck(dir: &Path, args: &[&str]) -> Output {
    Command::new(get_gradcheck_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("GRADCHECK_QUIET")
        .env_remove("GRADCHECK_LOG")
        .output()
        .expect("Failed to run gradcheck")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
