//! Shared world state for task lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use taskboard::user::{adapters::memory::InMemoryUserRepository, domain::UserId};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub users: Arc<InMemoryUserRepository>,
    pub user_ids: HashMap<String, UserId>,
    pub last_task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&users),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            users,
            user_ids: HashMap::new(),
            last_task: None,
            last_result: None,
        }
    }

    /// Returns the identifier of a user registered earlier in the scenario,
    /// or the raw email when no such user exists.
    pub fn assignee_ref(&self, email: &str) -> String {
        self.user_ids
            .get(email)
            .map_or_else(|| email.to_owned(), ToString::to_string)
    }

    /// Returns the first registered user.
    pub fn creator(&self) -> Result<UserId, eyre::Report> {
        self.user_ids
            .values()
            .next()
            .copied()
            .ok_or_else(|| eyre::eyre!("no user registered in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Due date `days` from now.
pub fn due_in(days: i64) -> DateTime<Utc> {
    Utc::now() + TimeDelta::days(days)
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
