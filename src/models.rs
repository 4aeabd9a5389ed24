use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Synthetic feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Traffic feed period in seconds
    pub traffic_interval_seconds: u64,
    /// Connection gauge period in seconds
    pub connection_interval_seconds: u64,
    /// Number of samples kept in the traffic window
    pub window_size: usize,
    /// Lower bound (inclusive) for generated requests per second
    pub requests_min: u64,
    /// Upper bound (exclusive) for generated requests per second
    pub requests_max: u64,
    /// Upper bound (exclusive) for generated suspicious requests
    pub suspicious_max: u64,
    /// Starting value for the active-connection gauge
    pub connection_base: u64,
    /// Maximum absolute per-tick delta applied to the connection gauge
    pub connection_max_delta: i64,
}

/// Training simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Progress tick period in milliseconds
    pub tick_millis: u64,
    /// Upper bound (exclusive) for the random per-tick progress increment
    pub max_increment: f64,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Synthetic feed configuration
    pub feed: FeedConfig,
    /// Training simulation configuration
    pub training: TrainingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            feed: FeedConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            traffic_interval_seconds: 5,
            connection_interval_seconds: 3,
            window_size: 20,
            requests_min: 100,
            requests_max: 600,
            suspicious_max: 50,
            connection_base: 1247,
            connection_max_delta: 10,
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            tick_millis: 500,
            max_increment: 10.0,
        }
    }
}
