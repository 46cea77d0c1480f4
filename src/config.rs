//! Configuration loader for the `soilsense-telemetry` service.
//!
//! Centralizes all runtime configuration values and their defaults, loading
//! from environment variables (with optional `.env` file support provided by
//! the caller) so no other module reads `env::var` for service settings.

use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional environment variable with a default value.
macro_rules! parse_env {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, giving every component the same
/// configuration snapshot for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// SQLite connection string for the reading store.
    pub db_url: String,

    /// Maximum number of store connections in the pool.
    pub db_pool_max: u32,

    /// TCP port the HTTP listener binds on (all interfaces).
    pub port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// All variables are optional:
/// - `DATABASE_URL` – store location (default: `sqlite://sensor_data.db?mode=rwc`,
///   which creates the database file on first run)
/// - `DB_POOL_MAX` – max store connections (default: 5)
/// - `PORT` – listen port (default: 5000)
///
/// Returns an error if a set variable fails to parse.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://sensor_data.db?mode=rwc".to_string());
    let db_pool_max = parse_env!("DB_POOL_MAX", u32, 5);
    let port = parse_env!("PORT", u16, 5000);

    Ok(Config {
        db_url,
        db_pool_max,
        port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL : {}", self.db_url);
        tracing::info!("  DB_POOL_MAX  : {}", self.db_pool_max);
        tracing::info!("  PORT         : {}", self.port);
    }
}
