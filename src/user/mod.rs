//! User directory, credentials and bearer-token sessions.
//!
//! Users are the assignees and creators referenced by tasks. The module
//! follows the same hexagonal split as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
