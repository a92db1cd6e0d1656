//! TLS certificate material checks.

use std::path::Path;

use crate::config::NodeConfig;
use crate::lint::rule::LintRule;

/// Validates TLS material when HTTPS is enabled.
///
/// With `https_port` set, both a certificate and a private key path must
/// be configured, and each configured path must point at an existing
/// regular file. Only metadata is read, never file contents. Everything
/// is skipped while HTTPS is disabled.
pub struct TlsRule;

impl LintRule for TlsRule {
    fn name(&self) -> &str {
        "tls"
    }

    fn description(&self) -> &str {
        "Checks that HTTPS has certificate and private key files configured and present"
    }

    fn check(&self, config: &NodeConfig) -> Vec<String> {
        let mut issues = Vec::new();
        let server = &config.server;

        if server.https_port <= 0 {
            return issues;
        }

        if server.tls_cert_file.is_empty() {
            issues.push("HTTPS enabled but no certificate file specified".to_string());
        }
        if server.tls_key_file.is_empty() {
            issues.push("HTTPS enabled but no private key file specified".to_string());
        }

        if !server.tls_cert_file.is_empty() && !Path::new(&server.tls_cert_file).is_file() {
            issues.push(format!(
                "Certificate file not found: {}",
                server.tls_cert_file
            ));
        }
        if !server.tls_key_file.is_empty() && !Path::new(&server.tls_key_file).is_file() {
            issues.push(format!("Private key file not found: {}", server.tls_key_file));
        }

        issues
    }
}
