//! Configuration loading
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. TOML config file (`--config`, else `RPNLOOP_CONFIG_PATH`, else `rpnloop.toml`)
//! 3. `RPNLOOP_*` environment variables, `__` separating sections
//!    (e.g. `RPNLOOP_OUTPUT__FORMAT=json`)
//!
//! A `.env` file in the working directory is loaded first, if present.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const ENV_PREFIX: &str = "RPNLOOP";
const CONFIG_PATH_VAR: &str = "RPNLOOP_CONFIG_PATH";
const DEFAULT_CONFIG_FILE: &str = "rpnloop.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Report format for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter, used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Print the `Execution completed` header before text reports
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            header: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder().build()
    }
}

/// Builder for `Config`
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    toml: Option<String>,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Read this file instead of searching; the file must exist
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Add inline TOML, applied after the config file
    pub fn toml(mut self, source: impl Into<String>) -> Self {
        self.toml = Some(source.into());
        self
    }

    /// Ignore `.env` and `RPNLOOP_*` environment variables
    pub fn skip_env(mut self, skip: bool) -> Self {
        self.skip_env = skip;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if !self.skip_env {
            dotenvy::dotenv().ok();
        }

        let explicit = self.config_path.clone().or_else(|| {
            if self.skip_env {
                None
            } else {
                std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from)
            }
        });

        let mut builder = config::Config::builder()
            .set_default("log.level", LogConfig::default().level)?
            .set_default("output.format", "text")?
            .set_default("output.header", true)?;

        builder = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path));
                }
                builder.add_source(config::File::from(path))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        if let Some(source) = &self.toml {
            builder = builder.add_source(config::File::from_str(source, config::FileFormat::Toml));
        }

        if !self.skip_env {
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
