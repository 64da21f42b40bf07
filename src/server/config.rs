use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration assembled from environment variables at startup.
pub struct Config {
    /// Connection string for the PostgreSQL database.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `LISTEN_ADDR` is optional and falls back
    /// to `0.0.0.0:8080` when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
