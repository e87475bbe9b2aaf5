use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("HOST", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());

    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "::1")])).unwrap();
    assert_eq!(cfg.addr, "[::1]:3000".parse().unwrap());
}

#[test]
fn rejects_bad_port() {
    for value in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", value)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: value.to_owned() });
    }
}

#[test]
fn rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".to_owned() });
    assert!(err.to_string().contains("localhost"));
}
