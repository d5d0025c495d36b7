//! # ins-config
//!
//! Layered configuration loading for the insight engine using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INSIGHT_*` prefix, `__` as separator)
//! 2. Project-level `.insight/config.toml`
//! 3. User-level `~/.config/insight/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INSIGHT_ENGINE__MAX_GRAPH_DEPTH` -> `engine.max_graph_depth`,
//! `INSIGHT_STORE__TRAIL_DIR` -> `store.trail_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ins_config::InsightConfig;
//!
//! let config = InsightConfig::load_with_dotenv().expect("config");
//! println!("walk depth: {}", config.engine.max_graph_depth);
//! ```

mod engine;
mod error;
mod store;

pub use engine::EngineConfig;
pub use error::ConfigError;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".insight/config.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "INSIGHT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InsightConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl InsightConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("insight").join("config.toml"))
    }
}
