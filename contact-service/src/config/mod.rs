use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

/// Connection settings for the document store. Both must be set for a store to be created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.name.is_some()
    }
}

impl ContactConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env, the configuration file, APP__* and PORT
        let common_config = core_config::Config::load()?;

        Ok(ContactConfig {
            common: common_config,
            database: DatabaseConfig {
                url: optional_env("DATABASE_URL"),
                name: optional_env("DATABASE_NAME"),
            },
            log_level: optional_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

/// An empty variable counts as unset.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.is_empty())
}
