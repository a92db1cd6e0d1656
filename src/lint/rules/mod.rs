//! Built-in lint rules.
//!
//! One module per rule group. The groups are independent; their fixed
//! evaluation order lives in [`crate::lint::RuleRegistry::with_builtins`].

pub mod discovery;
pub mod ports;
pub mod tls;

pub use discovery::DiscoveryRule;
pub use ports::PortsRule;
pub use tls::TlsRule;
