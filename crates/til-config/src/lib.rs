//! # til-config
//!
//! Layered configuration loading for til using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TIL_*` prefix, `__` as separator)
//! 2. Project-level `til.toml`
//! 3. User-level `~/.config/til/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TIL_SOURCE__FOLDER` -> `source.folder`,
//! `TIL_PATHS__POSTS_DIR` -> `paths.posts_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use til_config::TilConfig;
//!
//! let config = TilConfig::load_with_dotenv(Path::new(".")).expect("config");
//! println!("posts go to {}", config.paths.posts_dir);
//! ```

mod error;
mod markdown;
mod paths;
mod smoke;
mod source;

pub use error::ConfigError;
pub use markdown::MarkdownConfig;
pub use paths::PathsConfig;
pub use smoke::SmokeConfig;
pub use source::SourceConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "til.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TilConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub smoke: SmokeConfig,
}

impl TilConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT read `.env` -- use [`Self::load_with_dotenv`] for that.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `<project_root>/.env` (when present) and then the config.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path).map_err(|source| ConfigError::Dotenv {
                path: env_path.clone(),
                source,
            })?;
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TIL_").split("__"))
    }

    /// Reject values the commands cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.fetch_limit == 0 {
            return Err(invalid("source.fetch_limit", "must be at least 1"));
        }
        if self.source.max_output_bytes == 0 {
            return Err(invalid("source.max_output_bytes", "must be at least 1"));
        }
        if self.source.osascript_bin.trim().is_empty() {
            return Err(invalid("source.osascript_bin", "must not be empty"));
        }
        if self.markdown.wrap_width < 20 {
            return Err(invalid("markdown.wrap_width", "must be at least 20"));
        }
        if self.paths.posts_dir.trim().is_empty() {
            return Err(invalid("paths.posts_dir", "must not be empty"));
        }
        if self.paths.cache_file.trim().is_empty() {
            return Err(invalid("paths.cache_file", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("til").join("config.toml"))
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}
