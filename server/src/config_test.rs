use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.backend.base_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend.connect_timeout_secs, DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS);
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8081"),
        ("BIND_ADDR", "127.0.0.1"),
        ("BACKEND_URL", "https://builder.example.test"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.backend.base_url, "https://builder.example.test");
    assert_eq!(cfg.backend.connect_timeout_secs, 3);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend.base_url, DEFAULT_BACKEND_URL);
}

#[test]
fn backend_url_trailing_slashes_are_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "http://backend:9000//")])).unwrap();
    assert_eq!(cfg.backend.base_url, "http://backend:9000");
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == raw), "PORT={raw}");
    }
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
}

#[test]
fn backend_url_requires_http_scheme_and_host() {
    for raw in ["ftp://backend", "backend:8080", "http://", "https:///"] {
        let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBackendUrl(_)), "BACKEND_URL={raw}");
    }
}

#[test]
fn unparseable_timeout_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BACKEND_CONNECT_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.backend.connect_timeout_secs, DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS);
}
