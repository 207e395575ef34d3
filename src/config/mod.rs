//! Layered configuration loading using figment.
//!
//! Sources, highest precedence first:
//!
//! 1. `TASKBOARD_*` environment variables, with `__` separating sections
//!    (`TASKBOARD_STORAGE__DATABASE_URL` sets `storage.database_url`)
//! 2. A TOML file, `taskboard.toml` in the working directory unless another
//!    path is given
//! 3. Built-in defaults
//!
//! A `.env` file is read into the process environment first when
//! [`Settings::load_with_dotenv`] is used.

mod error;

pub use error::ConfigError;

use chrono::TimeDelta;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "taskboard.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Complete service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Persistence settings.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Session settings.
    #[serde(default)]
    pub auth: AuthSettings,
    /// Logging settings.
    #[serde(default)]
    pub log: LogSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 4000)),
        }
    }
}

/// Where tasks and users are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; lost on restart.
    #[default]
    Memory,
    /// `PostgreSQL` through a pooled Diesel connection.
    Postgres,
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Selected backend.
    pub backend: StorageBackend,
    /// `PostgreSQL` connection string.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: u32,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: None,
            pool_size: 10,
        }
    }
}

/// Longest accepted session lifetime, in hours (ten years).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Lifetime of issued bearer tokens, in hours.
    pub session_ttl_hours: i64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            session_ttl_hours: 720,
        }
    }
}

impl AuthSettings {
    /// Returns the session lifetime, clamped to [`MAX_SESSION_TTL_HOURS`].
    #[must_use]
    pub fn session_ttl(&self) -> TimeDelta {
        TimeDelta::hours(self.session_ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS))
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "taskboard=info,tower_http=info".to_owned(),
            json: false,
        }
    }
}

impl Settings {
    /// Builds the provider chain.
    ///
    /// `config_file` replaces [`DEFAULT_CONFIG_FILE`]; a missing file
    /// contributes nothing.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let file = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates settings from the file and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed, or a
    /// validation error from [`Self::validate`].
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let settings: Self = Self::figment(config_file).extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads `.env` into the process environment, then calls [`Self::load`].
    ///
    /// A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::load`].
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Err(err) if !err.not_found() => {
                tracing::debug!(error = %err, "ignoring unreadable .env file");
            }
            _ => {}
        }
        Self::load(config_file)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] for a postgres backend
    /// without a URL, or [`ConfigError::InvalidValue`] for a zero pool size
    /// or a session lifetime outside `1..=MAX_SESSION_TTL_HOURS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_url = self
            .storage
            .database_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if self.storage.backend == StorageBackend::Postgres && !has_url {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.storage.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.pool_size",
                reason: "must be at least 1".to_owned(),
            });
        }
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&self.auth.session_ttl_hours) {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_ttl_hours",
                reason: format!(
                    "must be between 1 and {MAX_SESSION_TTL_HOURS}, got {}",
                    self.auth.session_ttl_hours
                ),
            });
        }
        Ok(())
    }
}
