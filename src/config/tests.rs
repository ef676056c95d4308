use super::*;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn write_temp(suffix: &str, body: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_shipped_file() {
    let cfg = SecurityConfig::default();
    assert!(cfg.block_external_data);
    assert_eq!(cfg.rate_limit, 60);
    assert!(cfg.pii_redaction);
    assert!(cfg.validate().is_ok());
}

#[test]
fn renders_two_space_json() {
    let rendered = SecurityConfig::default().to_json_pretty().unwrap();
    assert_eq!(
        rendered,
        "{\n  \"block_external_data\": true,\n  \"rate_limit\": 60,\n  \"pii_redaction\": true\n}"
    );
    assert_eq!(
        SecurityConfig::from_json_str(&rendered).unwrap(),
        SecurityConfig::default()
    );
}

#[test]
fn missing_keys_take_defaults() {
    let cfg = SecurityConfig::from_json_str(r#"{"rate_limit": 10}"#).unwrap();
    assert_eq!(cfg.rate_limit, 10);
    assert!(cfg.block_external_data);
    assert!(cfg.pii_redaction);

    let cfg = SecurityConfig::from_toml_str("pii_redaction = false\n").unwrap();
    assert!(!cfg.pii_redaction);
    assert_eq!(cfg.rate_limit, 60);
}

#[test]
fn zero_rate_limit_is_rejected() {
    let err = SecurityConfig::from_json_str(r#"{"rate_limit": 0}"#).unwrap_err();
    assert!(matches!(err, EnvError::InvalidConfig(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SecurityConfig::from_json_str(r#"{"rate_limt": 5}"#).unwrap_err();
    assert!(matches!(err, EnvError::Json(_)));

    let err = SecurityConfig::from_toml_str("throttle = true\n").unwrap_err();
    assert!(matches!(err, EnvError::Toml(_)));
}

#[test]
fn loads_json_file() {
    let file = write_temp(
        ".json",
        r#"{"block_external_data": false, "rate_limit": 120, "pii_redaction": true}"#,
    );
    let cfg = SecurityConfig::load(file.path()).unwrap();
    assert!(!cfg.block_external_data);
    assert_eq!(cfg.rate_limit, 120);
}

#[test]
fn loads_toml_file_with_uppercase_extension() {
    let file = write_temp(".TOML", "rate_limit = 30\nblock_external_data = true\n");
    let cfg = SecurityConfig::load(file.path()).unwrap();
    assert_eq!(cfg.rate_limit, 30);
}

#[test]
fn unsupported_extension_fails_before_reading() {
    let file = write_temp(".yaml", "rate_limit: 30\n");
    let err = SecurityConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, EnvError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SecurityConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, EnvError::Io(_)));
}
