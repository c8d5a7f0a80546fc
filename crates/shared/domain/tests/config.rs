use dh_domain::config::{ApiConfig, LoggingConfig, ServerConfig};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.filter.is_none());
    assert!(logging.dir.is_none());
    assert!(!logging.json);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 8080, "ssl": { "cert": "c.pem", "key": "k.pem" } },
        "logging": { "level": "debug", "dir": "/var/log/dh", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    let ssl = cfg.server.ssl.as_ref().expect("ssl section");
    assert_eq!(ssl.cert, std::path::PathBuf::from("c.pem"));
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.dir.as_deref(), Some(std::path::Path::new("/var/log/dh")));
    assert!(cfg.logging.json);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn clones_share_until_mutated() {
    let original = ApiConfig::default();
    let mut tweaked = original.clone();
    tweaked.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(tweaked.server.port, 9000);
}
