//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores rules in a `Vec`, not a map: registration
//! order is evaluation order, and issue output order follows it.

use super::rule::LintRule;
use super::rules::{DiscoveryRule, PortsRule, TlsRule};
use crate::config::NodeConfig;

/// Ordered registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, in their fixed
    /// evaluation order: ports, discovery, TLS.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PortsRule));
        registry.register(Box::new(DiscoveryRule));
        registry.register(Box::new(TlsRule));
        registry
    }

    /// Register a lint rule at the end of the evaluation order.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Iterate over all rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order and concatenate their issues.
    pub fn check_all(&self, config: &NodeConfig) -> Vec<String> {
        let mut issues = Vec::new();
        for rule in self.iter() {
            let found = rule.check(config);
            if !found.is_empty() {
                tracing::debug!("rule '{}' reported {} issue(s)", rule.name(), found.len());
            }
            issues.extend(found);
        }
        issues
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
