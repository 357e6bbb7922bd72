// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};
use version_saver::config::{load_config, Config, LOCAL_CONFIG_FILE};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Runs `f` with the process working directory set to `dir`.
fn in_dir<T>(dir: &std::path::Path, f: impl FnOnce() -> T) -> T {
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = f();
    std::env::set_current_dir(previous).unwrap();
    result
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[git]
program = "/usr/local/bin/git"

[suggestion]
fallback_suffix = "-todo"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.git.program, "/usr/local/bin/git");
    assert_eq!(config.suggestion.fallback_suffix, "-todo");
    assert_eq!(config.suggestion.default_version, "v1.0");
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some(&fixture("versionsaver.toml"))).expect("Failed to load fixture");
    assert_eq!(config.suggestion.default_version, "v0.1");
    assert_eq!(config.suggestion.fallback_suffix, "-next");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Cannot read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[git\nprogram = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration parse error"));
}

#[test]
#[serial]
fn test_local_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[suggestion]\ndefault_version = \"v5.0\"\n",
    )
    .unwrap();

    let config = in_dir(dir.path(), || load_config(None)).unwrap();
    assert_eq!(config.suggestion.default_version, "v5.0");
}

#[test]
#[serial]
fn test_local_file_with_blank_program_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(LOCAL_CONFIG_FILE), "[git]\nprogram = \"\"\n").unwrap();

    let result = in_dir(dir.path(), || load_config(None));
    assert!(result.is_err());
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.git.program, "git");
    assert_eq!(config.suggestion.default_version, "v1.0");
}
