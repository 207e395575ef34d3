//! Task management for Taskboard.
//!
//! Tasks are created for an assignee, listed, searched, filtered and sorted,
//! updated piecemeal and deleted. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The pure selection pipeline and dashboard counts in [`query`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;
