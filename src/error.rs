//! Error types for Nodelint operations.
//!
//! This module defines [`NodelintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NodelintError` for load failures that need distinct handling
//! - Use `anyhow::Error` (via `NodelintError::Other`) for unexpected errors
//! - The `Display` text of the load variants doubles as the issue wording
//!   shown to users, so it must stay stable

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Nodelint operations.
#[derive(Debug, Error)]
pub enum NodelintError {
    /// Configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON (or does not match the schema).
    /// The message carries the parser's line/column detail.
    #[error("Invalid JSON format: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Nodelint operations.
pub type Result<T> = std::result::Result<T, NodelintError>;
