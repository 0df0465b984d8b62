use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use docroot::config::{CliArgs, Config};

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 9898);
    assert_eq!(cfg.workers, 5);
    assert_eq!(cfg.document_root, PathBuf::new());
    assert_eq!(cfg.listen_addr(), "0.0.0.0:9898");
}

#[test]
fn test_config_listen_shorthand_from_env() {
    let cfg = Config::default()
        .apply_env(env(&[("LISTEN", "127.0.0.1:3000")]))
        .unwrap();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 3000);
}

#[test]
fn test_config_specific_env_overrides_listen() {
    let cfg = Config::default()
        .apply_env(env(&[
            ("LISTEN", "127.0.0.1:3000"),
            ("DOCROOT_PORT", "4000"),
            ("DOCROOT_WORKERS", "12"),
            ("DOCROOT_ROOT", "/var/www"),
        ]))
        .unwrap();

    assert_eq!(cfg.listen_addr(), "127.0.0.1:4000");
    assert_eq!(cfg.workers, 12);
    assert_eq!(cfg.document_root, PathBuf::from("/var/www"));
}

#[test]
fn test_config_invalid_env_number_is_error() {
    let err = Config::default()
        .apply_env(env(&[("DOCROOT_PORT", "eighty")]))
        .unwrap_err();

    assert!(format!("{:#}", err).contains("DOCROOT_PORT"));
}

#[test]
fn test_config_listen_without_port_is_error() {
    let result = Config::default().apply_env(env(&[("LISTEN", "localhost")]));

    assert!(result.is_err());
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml_str("port: 8080\ndocument_root: ./public\n").unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.document_root, PathBuf::from("./public"));
    // Unset fields keep their defaults
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.workers, 5);
}

#[test]
fn test_config_from_yaml_rejects_bad_types() {
    assert!(Config::from_yaml_str("port: [1, 2]\n").is_err());
}

#[test]
fn test_config_zero_workers_is_invalid() {
    let cfg = Config {
        workers: 0,
        ..Config::default()
    };

    assert!(cfg.validate().is_err());
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_cli_flags_override_env() {
    let args = CliArgs::try_parse_from([
        "docroot", "-s", "127.0.0.1", "-p", "8000", "-w", "2", "-r", "site",
    ])
    .unwrap();

    let cfg = args
        .resolve(env(&[("DOCROOT_PORT", "4000"), ("DOCROOT_WORKERS", "9")]))
        .unwrap();

    assert_eq!(cfg.listen_addr(), "127.0.0.1:8000");
    assert_eq!(cfg.workers, 2);
    assert_eq!(cfg.document_root, PathBuf::from("site"));
}

#[test]
fn test_cli_accepts_underscore_doc_root() {
    let args = CliArgs::try_parse_from(["docroot", "--doc_root", "/srv"]).unwrap();

    assert_eq!(args.doc_root, Some(PathBuf::from("/srv")));
}

#[test]
fn test_cli_unset_flags_keep_env_values() {
    let args = CliArgs::try_parse_from(["docroot"]).unwrap();
    let cfg = args.resolve(env(&[("DOCROOT_HOST", "::1")])).unwrap();

    assert_eq!(cfg.host, "::1");
    assert_eq!(cfg.port, 9898);
}

#[test]
fn test_cli_rejects_zero_workers() {
    let args = CliArgs::try_parse_from(["docroot", "--workers", "0"]).unwrap();

    assert!(args.resolve(env(&[])).is_err());
}
