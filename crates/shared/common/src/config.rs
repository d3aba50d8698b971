//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use domain::DEFAULT_PHONE_COUNTRY;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default record store location
pub const DEFAULT_STORE_PATH: &str = "docval-store.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Log filter (`RUST_LOG` syntax)
    pub log_level: String,
    /// Country assumed for phone numbers without a `+` prefix
    pub default_phone_country: String,
    /// JSON file the record store mirrors to
    pub store_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_phone_country: DEFAULT_PHONE_COUNTRY.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read configuration from the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_level: non_empty("DOCVAL_LOG")
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            default_phone_country: non_empty("DEFAULT_PHONE_COUNTRY")
                .map(|c| c.trim().to_ascii_uppercase())
                .unwrap_or(defaults.default_phone_country),
            store_path: non_empty("DOCVAL_STORE")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
        }
    }
}
