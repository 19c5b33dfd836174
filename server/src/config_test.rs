use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_proxy_target, DEFAULT_API_PROXY_TARGET);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn from_lookup_strips_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("API_PROXY_TARGET", "http://api.internal:9000/")])).unwrap();
    assert_eq!(cfg.api_proxy_target, "http://api.internal:9000");
}

#[test]
fn from_lookup_parses_numbers() {
    let cfg =
        ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("PROXY_TIMEOUT_SECS", "5")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_blank_target() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_PROXY_TARGET", " / ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "API_PROXY_TARGET" });
}

