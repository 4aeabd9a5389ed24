//! Configuration management for the dashboard service.
//!
//! This module handles loading and managing application configuration
//! from environment variables and configuration files.

use std::env;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use crate::models::Config;

/// Load configuration from the config file (when present) and environment
/// variables, falling back to the built-in defaults.
pub fn load_config() -> Result<Config> {
    let config_file = env::var("CONFIG_FILE").unwrap_or_else(|_| "config/default.toml".to_string());

    let config = ConfigBuilder::builder()
        .add_source(File::with_name(&config_file).required(false))
        .add_source(Environment::default())
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("feed.traffic_interval_seconds", 5)?
        .set_default("feed.connection_interval_seconds", 3)?
        .set_default("feed.window_size", 20)?
        .set_default("feed.requests_min", 100)?
        .set_default("feed.requests_max", 600)?
        .set_default("feed.suspicious_max", 50)?
        .set_default("feed.connection_base", 1247)?
        .set_default("feed.connection_max_delta", 10)?
        .set_default("training.tick_millis", 500)?
        .set_default("training.max_increment", 10.0)?
        .build()
        .context("failed to build configuration")?;

    config
        .try_deserialize()
        .context("failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_falls_back_to_defaults() {
        let config = load_config().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.feed.window_size, 20);
        assert_eq!(config.training.tick_millis, 500);
    }
}
