use circ_kernel::config::{ConfigError, load_config};
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    name: String,
    #[serde(default)]
    retries: u32,
}

#[test]
fn loads_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "name = \"front desk\"\nretries = 2").unwrap();

    let sample: Sample = load_config(Some(file.path())).unwrap();
    assert_eq!(sample, Sample { name: "front desk".into(), retries: 2 });
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config::<Sample>(Some(dir.path().join("absent.toml"))).unwrap_err();
    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}

#[test]
fn shape_mismatch_reports_deserialize_context() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{ "retries": 1 }}"#).unwrap();

    let err = load_config::<Sample>(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}
