//! Configuration schema and file loading.
//!
//! # Architecture
//!
//! - [`schema`] - Struct definitions mapping to the JSON configuration format
//! - [`loader`] - Reading and parsing configuration files

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, parse_config};
pub use schema::{DiscoveryConfig, NodeConfig, ServerConfig};
