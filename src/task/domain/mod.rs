//! Domain model for task management.
//!
//! Tasks are validated on construction and mutated only through explicit
//! change sets, so every persisted task satisfies the title, description and
//! due-date rules regardless of which adapter stores it.

mod error;
mod ids;
mod priority;
mod status;
mod task;
mod text;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
pub use text::{TaskDescription, TaskTitle};
