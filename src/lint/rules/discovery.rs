//! Peer discovery reachability checks.

use crate::config::NodeConfig;
use crate::lint::rule::LintRule;

/// Multiaddress prefixes accepted for bootstrap peers. Only the prefix
/// is checked; full address validity is the node's job at dial time.
const PEER_PREFIXES: [&str; 2] = ["/ip4/", "/ip6/"];

/// Validates that the node has a way to find peers.
///
/// A node with mDNS, bootstrap, and DHT discovery all disabled will
/// never see another peer. When bootstrap discovery is enabled, the
/// peer list must be non-empty and every entry must look like an
/// IP multiaddress.
pub struct DiscoveryRule;

impl LintRule for DiscoveryRule {
    fn name(&self) -> &str {
        "discovery"
    }

    fn description(&self) -> &str {
        "Checks that at least one discovery mechanism is enabled and bootstrap peers are well-formed"
    }

    fn check(&self, config: &NodeConfig) -> Vec<String> {
        let mut issues = Vec::new();
        let discovery = &config.discovery;

        if !(discovery.enable_mdns || discovery.enable_bootstrap || discovery.enable_dht) {
            issues.push("No discovery mechanisms enabled - node will be isolated".to_string());
        }

        if discovery.enable_bootstrap {
            if discovery.bootstrap_peers.is_empty() {
                issues.push(
                    "Bootstrap discovery enabled but no bootstrap peers configured".to_string(),
                );
            }

            for peer in &discovery.bootstrap_peers {
                if !PEER_PREFIXES.iter().any(|prefix| peer.starts_with(prefix)) {
                    issues.push(format!("Invalid bootstrap peer format: {}", peer));
                }
            }
        }

        issues
    }
}
