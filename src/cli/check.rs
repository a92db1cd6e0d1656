//! Check command implementation.
//!
//! Validates a single configuration file and prints the findings as a
//! numbered list, or a one-line confirmation when the file is clean.

use std::path::{Path, PathBuf};

use console::style;

use crate::lint::validate_file;

/// Result of a check run.
#[derive(Debug)]
pub struct CheckResult {
    /// Whether the configuration passed.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CheckResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The check command implementation.
pub struct CheckCommand {
    config_file: PathBuf,
    quiet: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config_file: &Path, quiet: bool) -> Self {
        Self {
            config_file: config_file.to_path_buf(),
            quiet,
        }
    }

    /// Run the validation and print the outcome.
    ///
    /// Failure output is always shown; `quiet` only suppresses the
    /// success line. Styling degrades to plain text off a terminal, so
    /// the line content is stable for scripts either way.
    pub fn execute(&self) -> CheckResult {
        tracing::debug!("checking {}", self.config_file.display());

        let issues = validate_file(&self.config_file);

        if issues.is_empty() {
            if !self.quiet {
                println!(
                    "{} {} is valid",
                    style("Configuration").green(),
                    self.config_file.display()
                );
            }
            return CheckResult::success();
        }

        println!(
            "{} for {}",
            style("Configuration validation failed").red().bold(),
            self.config_file.display()
        );
        println!();
        for (index, issue) in issues.iter().enumerate() {
            println!("{}. {}", index + 1, issue);
        }

        CheckResult::failure(1)
    }
}
