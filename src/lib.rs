//! Nodelint - static configuration checker for peer-to-peer nodes.
//!
//! Nodelint reads a node's JSON configuration file and runs a fixed
//! checklist of rules over it: listen port ranges and conflicts, peer
//! discovery reachability, and TLS certificate material. It never
//! mutates the configuration and never touches the network.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema and file loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Validation rules and the rule registry
//!
//! # Example
//!
//! ```
//! use nodelint::config::NodeConfig;
//! use nodelint::lint::RuleRegistry;
//!
//! // A config with a valid P2P port but no discovery mechanism enabled.
//! let config: NodeConfig =
//!     serde_json::from_str(r#"{"server": {"port": 4001}}"#).unwrap();
//! let issues = RuleRegistry::with_builtins().check_all(&config);
//! assert!(issues.iter().any(|issue| issue.contains("isolated")));
//! ```
//!
//! For file-based validation, see [`lint::validate_file`].

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;

pub use error::{NodelintError, Result};
