//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Nodelint - static configuration checker for peer-to-peer nodes.
#[derive(Debug, Parser)]
#[command(name = "nodelint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file to check
    pub config_file: PathBuf,

    /// Only show errors, not success messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
