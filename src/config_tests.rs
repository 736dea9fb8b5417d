//! Tests for config

use super::*;
use proptest::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert_eq!(config.export.directory, PathBuf::from("."));
    assert!(!config.summary.enabled);
    assert_eq!(config.summary.model, "gemini-3-flash-preview");
    assert_eq!(config.summary.top_values, 10);
    assert_eq!(config.summary.sample_drops, 5);
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[clipboard]
backend = "osc52"

[export]
directory = "/tmp/reports"

[summary]
enabled = true
api_key = "abc"
model = "gemini-2.5-flash"
top_values = 3
sample_drops = 2
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
    assert_eq!(config.export.directory, PathBuf::from("/tmp/reports"));
    assert!(config.summary.enabled);
    assert_eq!(config.summary.api_key.as_deref(), Some("abc"));
    assert_eq!(config.summary.model, "gemini-2.5-flash");
    assert_eq!(config.summary.top_values, 3);
    assert_eq!(config.summary.sample_drops, 2);
}

#[test]
fn test_partial_summary_section_uses_defaults() {
    let config: Config = toml::from_str("[summary]\nenabled = true\n").unwrap();
    assert!(config.summary.enabled);
    assert_eq!(config.summary.api_key, None);
    assert_eq!(config.summary.top_values, 10);
}

#[test]
fn test_invalid_backend_fails_parse() {
    let result: Result<Config, _> = toml::from_str("[clipboard]\nbackend = \"invalid\"\n");
    assert!(result.is_err());
}

#[test]
fn test_load_missing_file_is_silent_default() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));
    assert!(result.warning.is_none());
    assert_eq!(result.config.clipboard.backend, ClipboardBackend::Auto);
}

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[clipboard]\nbackend = \"system\"").unwrap();

    let result = load_config_from(&path);
    assert!(result.warning.is_none());
    assert_eq!(result.config.clipboard.backend, ClipboardBackend::System);
}

#[test]
fn test_load_invalid_file_warns_and_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[summary\nenabled = true").unwrap();

    let result = load_config_from(&path);
    let warning = result.warning.expect("warning expected");
    assert!(warning.starts_with("Invalid config:"));
    assert!(!result.config.summary.enabled);
}

#[test]
fn test_load_directory_warns_read_failure() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from(dir.path());
    assert!(result.warning.unwrap().starts_with("Failed to read config:"));
}

#[test]
fn test_config_path_location() {
    let path = get_config_path();
    assert!(path.ends_with(".config/droplens/config.toml"));
}

// Any unknown backend name is rejected by serde
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_invalid_backend_rejected(
        backend in "[a-z]{3,10}".prop_filter(
            "not valid",
            |s| !["auto", "system", "osc52"].contains(&s.as_str())
        )
    ) {
        let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", backend);
        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_err());
    }

    #[test]
    fn prop_top_values_round_trip(n in 0usize..1000) {
        let config: Config = toml::from_str(&format!("[summary]\ntop_values = {}\n", n)).unwrap();
        prop_assert_eq!(config.summary.top_values, n);
    }
}
