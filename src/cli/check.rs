//! Handler for the `check` command group.

use std::path::Path;

use crate::cli::diagnostic::ConfigDiagnostic;
use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Validate a configuration file without running anything.
pub fn execute_config(path: &Path) -> Result<()> {
    output::note(&format!("Checking configuration: {}", path.display()));

    let config = match Config::load(path) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Parse(parse_err))) => {
            report_parse_error(path, &parse_err);
            return Err(ConfigError::Other("configuration check failed".into()).into());
        }
        Err(err) => {
            output::error(&err.to_string());
            return Err(err);
        }
    };

    output::ok("Configuration file is valid");

    output::section("Logging");
    output::key_value("Level", &config.logging.level);
    output::key_value("Format", &config.logging.format);

    output::section("Storage");
    output::key_value("Alerts file", config.storage.resolve_alerts_path().display());

    output::section("Suggest");
    output::key_value("Model", &config.suggest.model);
    output::key_value("API URL", &config.suggest.api_url);
    output::key_value("Max tokens", config.suggest.max_tokens);
    output::key_value("Temperature", config.suggest.temperature);

    println!();
    if std::env::var("ANTHROPIC_API_KEY").is_ok() {
        output::ok("ANTHROPIC_API_KEY is set");
    } else {
        output::warn("ANTHROPIC_API_KEY is not set; `oddswise suggest` will fail");
    }
    println!();

    Ok(())
}

/// Render a TOML parse failure with its source span through miette.
fn report_parse_error(path: &Path, parse_err: &toml::de::Error) {
    let src = std::fs::read_to_string(path).unwrap_or_default();
    let (offset, len) = parse_err
        .span()
        .map(|span| (span.start, span.end.saturating_sub(span.start).max(1)))
        .unwrap_or((0, 1));

    let diagnostic = ConfigDiagnostic::new(parse_err.message().to_string(), src, offset, len)
        .with_help("see config.toml.example for the expected layout");
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
