//! Shared application state handed to every handler.

use crate::task::{
    adapters::memory::InMemoryTaskRepository, ports::TaskRepository,
    services::TaskLifecycleService,
};
use crate::user::{
    adapters::memory::{InMemorySessionRepository, InMemoryUserRepository},
    ports::{SessionRepository, UserRepository},
    services::UserDirectoryService,
};
use chrono::TimeDelta;
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service over whichever storage backend was configured.
pub type TaskService = TaskLifecycleService<dyn TaskRepository, dyn UserRepository, DefaultClock>;

/// User directory over whichever storage backend was configured.
pub type UserService =
    UserDirectoryService<dyn UserRepository, dyn SessionRepository, DefaultClock>;

/// Services reachable from request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task lifecycle operations.
    pub tasks: TaskService,
    /// Registration, login and token resolution.
    pub users: UserService,
}

impl AppState {
    /// Wires both services over the given repositories.
    ///
    /// The task service and user directory share `users`, so assignees
    /// resolve against the same store that logins use.
    #[must_use]
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        session_ttl: TimeDelta,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            tasks: TaskLifecycleService::new(tasks, Arc::clone(&users), Arc::clone(&clock)),
            users: UserDirectoryService::new(users, sessions, clock).with_session_ttl(session_ttl),
        }
    }

    /// Builds state backed entirely by in-memory repositories.
    #[must_use]
    pub fn in_memory(session_ttl: TimeDelta) -> Self {
        Self::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
            session_ttl,
        )
    }
}
