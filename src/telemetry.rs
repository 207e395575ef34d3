//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

use crate::config::LogSettings;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is malformed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the configured filter when it is set and valid.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the configured filter cannot be parsed or
/// a subscriber is already installed.
pub fn init(settings: &LogSettings) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.filter))?;
    let registry = tracing_subscriber::registry().with(filter);
    if settings.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }
    Ok(())
}
