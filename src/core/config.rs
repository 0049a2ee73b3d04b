//! Configuration management for the payments MCP server.
//!
//! A centralized configuration structure populated from environment
//! variables layered over defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::transport::TransportConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Payment store configuration.
    pub store: StoreConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the in-memory payment store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Seed a demo ledger at startup so the tools are exercisable
    /// without a prior add_payment call.
    pub seed_demo_data: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "payments-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            store: StoreConfig {
                seed_demo_data: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_`: `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_SEED_DEMO_DATA`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(seed) = std::env::var("MCP_SEED_DEMO_DATA") {
            config.store.seed_demo_data = !matches!(seed.to_lowercase().as_str(), "false" | "0");
            info!(
                "Demo data seeding set from environment: {}",
                config.store.seed_demo_data
            );
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "payments-mcp-server");
        assert!(config.store.seed_demo_data);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_seed_flag_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEED_DEMO_DATA", "false");
        }
        let config = Config::from_env();
        assert!(!config.store.seed_demo_data);
        unsafe {
            std::env::remove_var("MCP_SEED_DEMO_DATA");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "payments-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "payments-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
