//! `PostgreSQL` session store.

use super::{models::SessionRow, repository::UserPgPool, schema::sessions};
use crate::user::{
    domain::{Session, SessionToken, UserId},
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed session store; tokens survive restarts.
#[derive(Debug, Clone)]
pub struct PostgresSessionRepository {
    pool: UserPgPool,
}

impl PostgresSessionRepository {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> SessionRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SessionRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SessionRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(SessionRepositoryError::persistence)?
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn store(&self, session: &Session) -> SessionRepositoryResult<()> {
        let row = to_row(session);
        self.run_blocking(move |connection| {
            diesel::insert_into(sessions::table)
                .values(&row)
                .execute(connection)
                .map_err(SessionRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find(&self, token: &SessionToken) -> SessionRepositoryResult<Option<Session>> {
        let raw = token.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = sessions::table
                .find(raw)
                .select(SessionRow::as_select())
                .first::<SessionRow>(connection)
                .optional()
                .map_err(SessionRepositoryError::persistence)?;
            Ok(row.map(row_to_session))
        })
        .await
    }

    async fn revoke(&self, token: &SessionToken) -> SessionRepositoryResult<bool> {
        let raw = token.as_str().to_owned();
        self.run_blocking(move |connection| {
            let removed = diesel::delete(sessions::table.find(raw))
                .execute(connection)
                .map_err(SessionRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            diesel::delete(sessions::table.filter(sessions::expires_at.le(now)))
                .execute(connection)
                .map_err(SessionRepositoryError::persistence)
        })
        .await
    }
}

fn to_row(session: &Session) -> SessionRow {
    SessionRow {
        token: session.token().as_str().to_owned(),
        user_id: session.user_id().into_inner(),
        issued_at: session.issued_at(),
        expires_at: session.expires_at(),
    }
}

fn row_to_session(row: SessionRow) -> Session {
    Session::from_persisted(
        SessionToken::from_raw(row.token),
        UserId::from_uuid(row.user_id),
        row.issued_at,
        row.expires_at,
    )
}
