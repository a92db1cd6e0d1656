//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the node's
//! JSON configuration file format. Every field is optional in the file;
//! absent sections and fields take zero/empty defaults so that the lint
//! rules see the same values the file would have produced explicitly.
//! Unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// Root configuration structure for a node's config.json.
///
/// Port fields are `i64` rather than `u16` on purpose: an out-of-range
/// value like `99999` must deserialize so the port rule can report it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Server listen ports and TLS material.
    pub server: ServerConfig,

    /// Peer discovery mechanisms.
    pub discovery: DiscoveryConfig,

    /// Log level name (e.g. "info").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log_level: String,

    /// Base64-encoded private key for a stable peer identity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub private_key: String,
}

/// Server-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind listeners on.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bind_address: String,

    /// P2P listen port.
    pub port: i64,

    /// HTTP API port (0 = disabled).
    pub http_port: i64,

    /// HTTPS API port (0 = disabled).
    pub https_port: i64,

    /// Path to the TLS certificate file.
    pub tls_cert_file: String,

    /// Path to the TLS private key file.
    pub tls_key_file: String,

    /// Externally reachable address, if not auto-detected.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub public_ip: String,
}

/// Peer discovery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Discover peers on the local network via mDNS.
    pub enable_mdns: bool,

    /// Seed discovery from statically configured bootstrap peers.
    pub enable_bootstrap: bool,

    /// Discover peers through the DHT.
    pub enable_dht: bool,

    /// Service tag advertised over mDNS.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mdns_service_tag: String,

    /// Suppress noisy mDNS warnings.
    pub mdns_quiet_mode: bool,

    /// Multiaddresses of bootstrap peers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bootstrap_peers: Vec<String>,

    /// Rendezvous string for DHT peer lookup.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dht_rendezvous: String,
}
