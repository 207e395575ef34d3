//! Storage wiring and the HTTP server loop.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::{AppState, create_router};
use crate::config::{Settings, StorageBackend};
use crate::task::adapters::postgres::PostgresTaskRepository;
use crate::user::adapters::postgres::{PostgresSessionRepository, PostgresUserRepository};

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The connection pool could not be created.
    #[error("failed to open database pool: {0}")]
    Pool(#[from] PoolError),
    /// Blocking start-up work panicked or was cancelled.
    #[error("start-up task failed: {0}")]
    StartUp(#[from] tokio::task::JoinError),
    /// The listener could not be bound or the server loop failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The postgres backend was selected without a connection string.
    #[error("storage.database_url is not set")]
    MissingDatabaseUrl,
}

/// Builds application state for the configured storage backend.
///
/// Sessions share the backend with users, so the in-memory backend signs
/// everyone out on restart while the postgres backend keeps tokens valid.
///
/// # Errors
///
/// Returns [`ServerError::Pool`] when the `PostgreSQL` pool cannot connect.
pub async fn build_state(settings: &Settings) -> Result<AppState, ServerError> {
    let ttl = settings.auth.session_ttl();
    match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage");
            Ok(AppState::in_memory(ttl))
        }
        StorageBackend::Postgres => {
            let url = settings
                .storage
                .database_url
                .clone()
                .ok_or(ServerError::MissingDatabaseUrl)?;
            let pool_size = settings.storage.pool_size;
            let pool = tokio::task::spawn_blocking(move || {
                Pool::builder()
                    .max_size(pool_size)
                    .build(ConnectionManager::<PgConnection>::new(url))
            })
            .await??;
            tracing::info!(pool_size, "using PostgreSQL storage");
            Ok(AppState::new(
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresSessionRepository::new(pool)),
                ttl,
            ))
        }
    }
}

/// Binds the listener and serves until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns [`ServerError`] when start-up fails or the server loop aborts.
pub async fn run(settings: Settings) -> Result<(), ServerError> {
    let state = build_state(&settings).await?;
    let listener = TcpListener::bind(settings.server.bind).await?;
    tracing::info!(address = %settings.server.bind, "listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        park_on_error(signal::ctrl_c().await, "Ctrl+C").await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => park_on_error(Err(error), "SIGTERM").await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

/// Resolves once a signal has arrived; a listener that failed to register
/// never resolves, so it cannot trigger a shutdown.
async fn park_on_error(received: std::io::Result<()>, signal_name: &'static str) {
    if let Err(error) = received {
        tracing::error!(%error, signal = signal_name, "failed to listen for signal");
        std::future::pending::<()>().await;
    }
}
