//! Port range and conflict checks.

use std::collections::HashSet;

use crate::config::NodeConfig;
use crate::lint::rule::LintRule;

const PORT_MIN: i64 = 1;
const PORT_MAX: i64 = 65535;

fn in_range(port: i64) -> bool {
    (PORT_MIN..=PORT_MAX).contains(&port)
}

/// Validates listen port ranges and cross-service port conflicts.
///
/// The P2P port is mandatory and must be in range. HTTP and HTTPS ports
/// are optional (0 = disabled) but must be in range when set. All active
/// ports must be distinct; any collision yields a single conflict issue.
pub struct PortsRule;

impl LintRule for PortsRule {
    fn name(&self) -> &str {
        "ports"
    }

    fn description(&self) -> &str {
        "Checks that listen ports are in range and do not collide"
    }

    fn check(&self, config: &NodeConfig) -> Vec<String> {
        let mut issues = Vec::new();
        let server = &config.server;

        if !in_range(server.port) {
            issues.push(format!(
                "Invalid P2P port: {} (must be 1-65535)",
                server.port
            ));
        }

        if server.http_port != 0 && !in_range(server.http_port) {
            issues.push(format!(
                "Invalid HTTP port: {} (must be 1-65535)",
                server.http_port
            ));
        }

        if server.https_port != 0 && !in_range(server.https_port) {
            issues.push(format!(
                "Invalid HTTPS port: {} (must be 1-65535)",
                server.https_port
            ));
        }

        let active: Vec<i64> = [server.port, server.http_port, server.https_port]
            .into_iter()
            .filter(|p| *p > 0)
            .collect();
        let distinct: HashSet<i64> = active.iter().copied().collect();
        if distinct.len() < active.len() {
            issues.push("Port conflict detected: multiple services using same port".to_string());
        }

        issues
    }
}
