//! Configuration file loading.
//!
//! This module handles reading a configuration file from disk and
//! parsing it into [`NodeConfig`].

use crate::config::schema::NodeConfig;
use crate::error::{NodelintError, Result};
use std::fs;
use std::path::Path;

/// Load a single config file and parse it into NodeConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigReadError` if the file exists but can't be read.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_config_file(path: &Path) -> Result<NodeConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NodelintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NodelintError::ConfigReadError {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_config(&content, path)
}

/// Parse JSON content into NodeConfig.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<NodeConfig> {
    serde_json::from_str(content).map_err(|e| NodelintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
