//! In-memory session store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{Session, SessionToken},
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};

/// Thread-safe in-memory session store. Sessions do not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl InMemorySessionRepository {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> SessionRepositoryError {
    SessionRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn store(&self, session: &Session) -> SessionRepositoryResult<()> {
        let mut sessions = self.sessions.write().map_err(lock_error)?;
        sessions.insert(session.token().clone(), session.clone());
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> SessionRepositoryResult<Option<Session>> {
        let sessions = self.sessions.read().map_err(lock_error)?;
        Ok(sessions.get(token).cloned())
    }

    async fn revoke(&self, token: &SessionToken) -> SessionRepositoryResult<bool> {
        let mut sessions = self.sessions.write().map_err(lock_error)?;
        Ok(sessions.remove(token).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionRepositoryResult<usize> {
        let mut sessions = self.sessions.write().map_err(lock_error)?;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        Ok(before.saturating_sub(sessions.len()))
    }
}
