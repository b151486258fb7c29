use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Environment variable that overrides the listen port.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Loads `.env`, an optional `configuration` file and `APP__*` variables,
    /// then applies the bare `PORT` variable on top.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut config: Config = config.try_deserialize()?;
        config.apply_port_override(env::var(PORT_ENV).ok().as_deref())?;

        Ok(config)
    }

    pub fn apply_port_override(&mut self, raw: Option<&str>) -> Result<(), AppError> {
        if let Some(raw) = raw {
            self.port = raw.trim().parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("{} must be a valid port, got {:?}: {}", PORT_ENV, raw, e))
            })?;
        }
        Ok(())
    }
}
