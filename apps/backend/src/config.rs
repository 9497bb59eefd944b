//! Server configuration read from the environment

use recall_core::SchedulerConfig;
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub scheduler: SchedulerConfig,
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(p) => p.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => 3000,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(n) => n.parse::<u32>().map_err(|e| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => 10,
        };

        let scheduler = match lookup("SCHEDULER_CONFIG") {
            Some(json) => serde_json::from_str::<SchedulerConfig>(&json).map_err(|e| {
                ConfigError::Invalid {
                    name: "SCHEDULER_CONFIG",
                    reason: e.to_string(),
                }
            })?,
            None => SchedulerConfig::default(),
        };
        scheduler.validate().map_err(|e| ConfigError::Invalid {
            name: "SCHEDULER_CONFIG",
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            scheduler,
        })
    }

    /// Address the server listens on
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
