//! Request handlers grouped by resource.

mod health;
mod tasks;
mod users;

pub use health::{health, not_found, root};
pub use tasks::{create_task, delete_task, get_task, list_tasks, task_stats, update_task};
pub use users::{list_users, login, logout, register};
