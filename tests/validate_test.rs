//! Integration tests for the library validation API.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use nodelint::config::NodeConfig;
use nodelint::lint::{validate_file, RuleRegistry};

fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

fn check(json: &str) -> Vec<String> {
    let config: NodeConfig = serde_json::from_str(json).unwrap();
    RuleRegistry::with_builtins().check_all(&config)
}

#[test]
fn clean_config_has_no_issues() {
    let issues = check(
        r#"{
            "server": {"port": 4001, "http_port": 8080},
            "discovery": {"enable_mdns": true}
        }"#,
    );
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn out_of_range_p2p_port_yields_exactly_one_port_issue() {
    for port in ["0", "-1", "65536", "99999"] {
        let issues = check(&format!(
            r#"{{"server": {{"port": {port}}}, "discovery": {{"enable_dht": true}}}}"#
        ));
        let port_issues: Vec<&String> = issues
            .iter()
            .filter(|i| i.contains("Invalid P2P port"))
            .collect();
        assert_eq!(port_issues.len(), 1, "port {port}: {issues:?}");
    }
}

#[test]
fn pairwise_distinct_ports_have_no_conflict() {
    let issues = check(
        r#"{
            "server": {"port": 4001, "http_port": 8080, "https_port": 0},
            "discovery": {"enable_mdns": true}
        }"#,
    );
    assert!(!issues.iter().any(|i| i.contains("conflict")));
}

#[test]
fn any_collision_yields_exactly_one_conflict_issue() {
    let issues = check(
        r#"{
            "server": {"port": 8080, "http_port": 8080, "https_port": 8080},
            "discovery": {"enable_mdns": true}
        }"#,
    );
    let conflicts: Vec<&String> = issues.iter().filter(|i| i.contains("conflict")).collect();
    assert_eq!(conflicts.len(), 1);
}

#[test]
fn isolation_issue_is_reported_regardless_of_other_fields() {
    let issues = check(
        r#"{
            "server": {"port": 70000, "https_port": 443},
            "discovery": {}
        }"#,
    );
    assert!(issues
        .iter()
        .any(|i| i == "No discovery mechanisms enabled - node will be isolated"));
}

#[test]
fn bare_ip_bootstrap_peer_yields_one_format_issue_with_literal() {
    let issues = check(
        r#"{
            "server": {"port": 4001},
            "discovery": {"enable_bootstrap": true, "bootstrap_peers": ["192.168.1.1"]}
        }"#,
    );
    let format_issues: Vec<&String> = issues
        .iter()
        .filter(|i| i.contains("Invalid bootstrap peer format"))
        .collect();
    assert_eq!(format_issues.len(), 1);
    assert_eq!(
        format_issues[0],
        "Invalid bootstrap peer format: 192.168.1.1"
    );
}

#[test]
fn https_with_empty_paths_yields_exactly_two_tls_issues() {
    let issues = check(
        r#"{
            "server": {
                "port": 4001,
                "https_port": 443,
                "tls_cert_file": "",
                "tls_key_file": ""
            },
            "discovery": {"enable_mdns": true}
        }"#,
    );
    assert_eq!(
        issues,
        vec![
            "HTTPS enabled but no certificate file specified",
            "HTTPS enabled but no private key file specified",
        ]
    );
}

#[test]
fn rule_groups_all_run_and_concatenate_in_order() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"{
            "server": {"port": 0, "https_port": 443},
            "discovery": {"enable_bootstrap": true, "bootstrap_peers": ["badpeer"]}
        }"#,
    );

    let issues = validate_file(&path);

    assert_eq!(
        issues,
        vec![
            "Invalid P2P port: 0 (must be 1-65535)".to_string(),
            "Invalid bootstrap peer format: badpeer".to_string(),
            "HTTPS enabled but no certificate file specified".to_string(),
            "HTTPS enabled but no private key file specified".to_string(),
        ]
    );
}

#[test]
fn load_failure_short_circuits_rules() {
    let temp = TempDir::new().unwrap();
    // This document would trip every rule group, but it never parses.
    let path = write_config(&temp, r#"{"server": {"port": 0,"#);

    let issues = validate_file(&path);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].starts_with("Invalid JSON format:"));
}

#[test]
fn missing_file_short_circuits_rules() {
    let temp = TempDir::new().unwrap();
    let issues = validate_file(&temp.path().join("absent.json"));

    assert_eq!(issues.len(), 1);
    assert!(issues[0].starts_with("Configuration file not found:"));
    assert!(issues[0].contains("absent.json"));
}

#[test]
fn tls_file_existence_is_checked_against_the_filesystem() {
    let temp = TempDir::new().unwrap();
    let cert = temp.path().join("cert.pem");
    let key = temp.path().join("key.pem");
    fs::write(&cert, "cert").unwrap();
    fs::write(&key, "key").unwrap();

    let path = write_config(
        &temp,
        &format!(
            r#"{{
                "server": {{
                    "port": 4001,
                    "https_port": 8443,
                    "tls_cert_file": "{}",
                    "tls_key_file": "{}"
                }},
                "discovery": {{"enable_mdns": true}}
            }}"#,
            cert.display(),
            key.display()
        ),
    );

    assert!(validate_file(&path).is_empty());
}
