use std::io::Write;

use oddswise::config::Config;
use oddswise::error::{ConfigError, Error};
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn shipped_example_config_is_valid() {
    let file = write_temp_config(include_str!("../config.toml.example"));
    let config = Config::load(file.path()).expect("example config loads");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.suggest.max_tokens, 1024);
}

#[test]
fn config_rejects_unknown_logging_format() {
    let toml = r#"
[logging]
level = "info"
format = "fancy"
"#;
    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        })) => {}
        other => panic!("expected invalid logging.format, got {other:?}"),
    }
}

#[test]
fn config_rejects_out_of_range_temperature() {
    let toml = r#"
[suggest]
temperature = 3.5
"#;
    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "suggest.temperature",
            ..
        })) => {}
        other => panic!("expected invalid temperature, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_max_tokens() {
    let toml = r#"
[suggest]
max_tokens = 0
"#;
    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "suggest.max_tokens",
            ..
        })) => {}
        other => panic!("expected invalid max_tokens, got {other:?}"),
    }
}

#[test]
fn config_rejects_malformed_api_url() {
    let toml = r#"
[suggest]
api_url = "not a url"
"#;
    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "suggest.api_url",
            ..
        })) => {}
        other => panic!("expected invalid api_url, got {other:?}"),
    }
}

#[test]
fn config_surfaces_toml_parse_errors() {
    let file = write_temp_config("[logging\nlevel = ");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn load_or_default_tolerates_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn load_or_default_still_rejects_a_broken_file() {
    let file = write_temp_config("[logging]\nlevel = \"info\"\nformat = \"fancy\"\n");
    assert!(Config::load_or_default(file.path()).is_err());
}
