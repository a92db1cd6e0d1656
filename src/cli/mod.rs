//! Command-line interface for Nodelint.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command: validate one file, print findings

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CheckResult};
