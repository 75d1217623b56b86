//! # ghday-config
//!
//! Layered configuration loading for ghday using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GHDAY_*` prefix, `__` as separator)
//! 2. `GITHUB_TOKEN` / `GITHUB_USER`
//! 3. An explicit config file passed with `--config`
//! 4. Local `ghday.toml` in the current directory
//! 5. User-level `~/.config/ghday/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GHDAY_GITHUB__TOKEN` -> `github.token`,
//! `GHDAY_GENERAL__DEADLINE_SECS` -> `general.deadline_secs`, etc.
//! The bare `GITHUB_TOKEN` and `GITHUB_USER` variables map to `github.token`
//! and `github.user`.
//!
//! # Usage
//!
//! ```no_run
//! use ghday_config::GhdayConfig;
//!
//! let config = GhdayConfig::load_with_dotenv(None).expect("config");
//! if config.github.is_configured() {
//!     println!("reporting on {}", config.github.user);
//! }
//! ```

mod error;
mod general;
mod github;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use github::{DEFAULT_API_URL, GitHubConfig, MAX_PER_PAGE};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "ghday.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GhdayConfig {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GhdayConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(explicit).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory or
    /// one of its parents. A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file (must exist)
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Conventional GitHub variables
        figment = figment.merge(
            Env::raw()
                .only(&["GITHUB_TOKEN", "GITHUB_USER"])
                .map(|key| key.as_str().to_ascii_lowercase().replacen('_', ".", 1).into()),
        );

        // Layer 5: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("GHDAY_").split("__"))
    }

    /// The user to report on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if `github.user` is empty.
    pub fn require_user(&self) -> Result<&str, ConfigError> {
        if self.github.is_configured() {
            Ok(self.github.user.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: String::from("github.user"),
            })
        }
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ghday").join("config.toml"))
    }
}
