//! # gomun-config
//!
//! Layered configuration loading for the GOMUN client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOMUN_*` prefix, `__` as separator)
//! 2. Project-level `.gomun/config.toml`
//! 3. User-level `~/.config/gomun/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOMUN_API__BASE_URL` -> `api.base_url`,
//! `GOMUN_STORAGE__DIR` -> `storage.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gomun_config::GomunConfig;
//!
//! let config = GomunConfig::load_with_dotenv().expect("config");
//! println!("API base: {:?}", config.api.base_url);
//! ```

mod api;
mod error;
mod storage;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GomunConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl GomunConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory (or its ancestors). A missing or unreadable `.env` is not an
    /// error; the latter is logged at debug level.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::debug!(%error, "ignoring unreadable .env"),
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gomun/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GOMUN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gomun").join("config.toml"))
    }
}
