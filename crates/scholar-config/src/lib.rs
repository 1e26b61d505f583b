//! # scholar-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCHOLAR_*` prefix, `__` as separator)
//! 2. Project-level `.scholar/config.toml`
//! 3. User-level `~/.config/scholar-tracker/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SCHOLAR_STORE__PATH` -> `store.path` and
//! `SCHOLAR_DISPLAY__DEFAULT_SORT` -> `display.default_sort`.
//!
//! ```no_run
//! use scholar_config::ScholarConfig;
//!
//! let config = ScholarConfig::load_with_dotenv().expect("config");
//! println!("records live in {}", config.store.path.display());
//! ```

mod display;
mod error;
mod store;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use store::{DEFAULT_SLOT, STORE_FILE_NAME, StoreConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config and data dirs.
pub const APP_DIR: &str = "scholar-tracker";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SCHOLAR_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScholarConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ScholarConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`load_with_dotenv`](Self::load_with_dotenv) for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
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

        let local_path = PathBuf::from(".scholar/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
    }
}
