use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "?";
const DEFAULT_API_ADDR: &str = "0.0.0.0:8000";

pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    pub api_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Token present and every optional value valid
    /// - `Err(AppError::ConfigErr)` - Missing token or unparseable listen address
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token =
            var("BOT_TOKEN").ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;

        let command_prefix =
            var("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        let api_addr = var("API_ADDR")
            .unwrap_or_else(|| DEFAULT_API_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "API_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            discord_token,
            command_prefix,
            api_addr,
        })
    }
}
