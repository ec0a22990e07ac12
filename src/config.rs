//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. The Anthropic API key is never
//! read from the file; it comes from the `ANTHROPIC_API_KEY` environment
//! variable at runtime (`.env` files are honored via dotenvy).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Alert persistence configuration.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// Path to the alerts JSON file. Defaults to the platform data
    /// directory when unset.
    pub alerts_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the effective alerts file path.
    pub fn resolve_alerts_path(&self) -> PathBuf {
        self.alerts_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("oddswise")
                .join("alerts.json")
        })
    }
}

/// Settings for the AI suggestion flow.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_api_url() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

fn default_max_tokens() -> usize {
    1024
}

fn default_temperature() -> f64 {
    0.2
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_url: default_api_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist. Every command except `check config` goes through this, so the
    /// dashboard works out of the box without a config file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into());
            }
        }

        if self.suggest.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "suggest.max_tokens",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if !(0.0..=2.0).contains(&self.suggest.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "suggest.temperature",
                reason: format!("must be within [0, 2], got {}", self.suggest.temperature),
            }
            .into());
        }

        Url::parse(&self.suggest.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "suggest.api_url",
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Initialize the tracing subscriber. `RUST_LOG` wins over the
    /// configured level when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
