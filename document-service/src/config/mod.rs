use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_SERVICE_NAME: &str = "document-service";

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
}

impl DocumentConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env, APP__ prefix and PORT
        let common = core_config::Config::load()?;

        Ok(DocumentConfig {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
        })
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}
