//! Glossary configuration.
//!
//! Resolves where the database lives and how long cached reads stay valid.
//! Sources, highest priority first: explicit overrides (CLI flags), environment
//! variables, the JSON settings file, built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::glossary::{GlossaryError, GlossaryStore};
use crate::turso::{DatabaseLocation, TursoClient};

/// Default settings file name inside the config directory
pub const SETTINGS_FILE: &str = "glossary.json";

/// Environment variable overriding the database location
pub const DB_ENV: &str = "GLOSSARY_DB";

/// Environment variable overriding the cache TTL in seconds (0 disables the cache)
pub const CACHE_TTL_ENV: &str = "GLOSSARY_CACHE_TTL";

const APP_DIR: &str = "glossary";
const DEFAULT_DB_FILE: &str = "glossary.db";

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A setting had a value that could not be used
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    /// The settings file could not be read
    #[error("Failed to read settings file {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
    /// The settings file is not valid JSON for this schema
    #[error("Failed to parse settings file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Contents of the JSON settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsFile {
    /// Database file path, or ":memory:"
    #[serde(default)]
    pub database: Option<DatabaseLocation>,
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,
}

impl SettingsFile {
    /// Load a settings file.
    ///
    /// A missing file yields the empty settings unless `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !path.exists() && !required {
            crate::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Values supplied explicitly by the caller, usually from CLI flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub database: Option<DatabaseLocation>,
    pub cache_ttl_secs: Option<u64>,
    /// Settings file to read instead of the default one; must exist
    pub settings_path: Option<PathBuf>,
}

/// Resolved glossary configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GlossaryConfig {
    pub database: DatabaseLocation,
    /// `None` (the default) disables the read cache
    pub cache_ttl: Option<Duration>,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::File(default_database_path()),
            cache_ttl: None,
        }
    }
}

impl GlossaryConfig {
    /// Resolve configuration from overrides, the process environment and the settings file.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok(), default_settings_path())
    }

    /// Resolve configuration with an explicit environment lookup and default settings path.
    pub fn resolve_with(
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        default_settings: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let settings = match (&overrides.settings_path, default_settings) {
            (Some(path), _) => SettingsFile::load(path, true)?,
            (None, Some(path)) => SettingsFile::load(&path, false)?,
            (None, None) => SettingsFile::default(),
        };

        let env_database = env(DB_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(|v| DatabaseLocation::from(PathBuf::from(v)));

        let env_ttl = env(CACHE_TTL_ENV)
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: CACHE_TTL_ENV.to_string(),
                    value: v.clone(),
                })
            })
            .transpose()?;

        let defaults = Self::default();

        let database = overrides
            .database
            .clone()
            .or(env_database)
            .or(settings.database)
            .unwrap_or(defaults.database);

        let cache_ttl = match overrides.cache_ttl_secs.or(env_ttl).or(settings.cache_ttl_secs) {
            Some(secs) => ttl_from_secs(secs),
            None => defaults.cache_ttl,
        };

        crate::debug!(
            "Resolved glossary config: database={}, cache_ttl={:?}",
            database,
            cache_ttl
        );
        Ok(Self { database, cache_ttl })
    }

    /// Open the configured database and build a store over it.
    pub async fn open_store(&self) -> Result<GlossaryStore<TursoClient>, GlossaryError> {
        let client = TursoClient::open(self.database.clone())
            .await
            .map_err(crate::connection::ConnectionError::from)?;
        let store = GlossaryStore::open(client).await?;
        Ok(match self.cache_ttl {
            Some(ttl) => store.with_read_cache(ttl),
            None => store,
        })
    }
}

fn ttl_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// `<data_dir>/glossary/glossary.db`, or `./glossary.db` without a data dir
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DEFAULT_DB_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

/// `<config_dir>/glossary/glossary.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
