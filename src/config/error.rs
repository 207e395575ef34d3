//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge failed.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// The postgres backend was selected without a connection string.
    #[error("storage.database_url is required when storage.backend is \"postgres\"")]
    MissingDatabaseUrl,

    /// A field holds a value outside its permitted range.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
