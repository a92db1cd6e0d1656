//! Configuration validation rules.
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - The ordered collection of rules ([`RuleRegistry`])
//! - **[`validate_file`]** - Load a file and run every built-in rule
//!
//! Rules run in a fixed order (ports, discovery, TLS) and their issues
//! concatenate in that order. Issues are plain strings; an empty list
//! means the configuration passed.
//!
//! # Example
//!
//! ```
//! use nodelint::config::NodeConfig;
//! use nodelint::lint::RuleRegistry;
//!
//! let registry = RuleRegistry::with_builtins();
//! let issues = registry.check_all(&NodeConfig::default());
//!
//! // A default (all-zero) config has an invalid P2P port and no
//! // discovery mechanism.
//! assert_eq!(issues.len(), 2);
//! ```

pub mod registry;
pub mod rule;
pub mod rules;

pub use registry::RuleRegistry;
pub use rule::LintRule;
pub use rules::{DiscoveryRule, PortsRule, TlsRule};

use std::path::Path;

use crate::config::load_config_file;

/// Load a configuration file and run every built-in rule against it.
///
/// Load failures short-circuit: a missing file or malformed JSON comes
/// back as the single issue in the list and no rules run. On a parsed
/// document every rule group runs to completion; one group's issues
/// never suppress another's.
pub fn validate_file(path: &Path) -> Vec<String> {
    let config = match load_config_file(path) {
        Ok(config) => config,
        Err(err) => return vec![err.to_string()],
    };

    tracing::debug!("loaded {}, running lint rules", path.display());
    RuleRegistry::with_builtins().check_all(&config)
}
