//! Session store port.

use crate::user::domain::{Session, SessionToken};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionRepositoryResult<T> = Result<T, SessionRepositoryError>;

/// Session persistence contract.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores an issued session.
    async fn store(&self, session: &Session) -> SessionRepositoryResult<()>;

    /// Finds a session by token. Expired sessions are still returned; expiry
    /// is checked by the caller against its own clock.
    async fn find(&self, token: &SessionToken) -> SessionRepositoryResult<Option<Session>>;

    /// Removes a session. Returns `false` when the token was unknown.
    async fn revoke(&self, token: &SessionToken) -> SessionRepositoryResult<bool>;

    /// Removes every session that has expired at `now` and returns how many
    /// were dropped.
    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionRepositoryResult<usize>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionRepositoryError {
    /// Persistence-layer failure.
    #[error("session store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
