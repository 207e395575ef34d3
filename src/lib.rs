//! Taskboard: a task-management service.
//!
//! Users register, sign in with bearer tokens and create, search, filter,
//! sort, update and delete tasks assigned to one another.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of ports
//! - **Services**: Orchestration of domain logic over ports
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle and the search/filter/sort pipeline
//! - [`user`]: User directory, credentials and sessions
//! - [`api`]: HTTP routes, bearer authentication and JSON envelopes
//! - [`config`]: Layered settings
//! - [`telemetry`]: Logging setup
//! - [`server`]: Storage wiring and the serve loop

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
pub mod user;
