//! Configuration from environment variables.

use crate::server::error::config::ConfigError;

/// Application config assembled once at startup
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub listen_address: String,
}

impl Config {
    /// Reads the config from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)`: all required variables were present
    /// - `Err(ConfigError::MissingEnvVar)`: a required variable was unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
