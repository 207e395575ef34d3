//! Shared world state for task query BDD scenarios.

use chrono::{DateTime, NaiveDate, Utc};
use rstest::fixture;
use taskboard::task::domain::Task;
use taskboard::user::domain::{UserId, UserSummary};

/// Scenario world for task query behaviour tests.
pub struct TaskQueryWorld {
    pub owner: UserSummary,
    pub tasks: Vec<Task>,
    pub selected: Option<Vec<Task>>,
}

impl TaskQueryWorld {
    /// Creates a world with no tasks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owner: UserSummary {
                id: UserId::new(),
                name: "Ada Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
            },
            tasks: Vec::new(),
            selected: None,
        }
    }
}

impl Default for TaskQueryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskQueryWorld {
    TaskQueryWorld::default()
}

/// Parses a `YYYY-MM-DD` scenario date as midnight UTC.
pub fn parse_day(raw: &str) -> Result<DateTime<Utc>, eyre::Report> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid scenario date {raw:?}: {err}"))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
