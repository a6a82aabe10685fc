//! # rapport-config
//!
//! Layered configuration loading for Rapport using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RAPPORT_*` prefix, `__` as separator)
//! 2. Project-level `.rapport/config.toml`
//! 3. User-level `~/.config/rapport/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `RAPPORT_API__BASE_URL` -> `api.base_url`, `RAPPORT_SESSION__PATH` -> `session.path`.
//!
//! # Usage
//!
//! ```no_run
//! use rapport_config::RapportConfig;
//!
//! let config = RapportConfig::load().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod session;
mod web;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use session::SessionConfig;
pub use web::WebConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RapportConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub web: WebConfig,
}

impl RapportConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".rapport/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RAPPORT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rapport").join("config.toml"))
    }
}
