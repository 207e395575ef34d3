//! In-memory task queries.
//!
//! [`select`] is a pure function of a task snapshot and a [`FilterSpec`];
//! it performs no I/O and never fails. [`TaskCounts`] summarises a snapshot
//! for the dashboard.

mod filter;
mod pipeline;
mod stats;

pub use filter::{FilterSpec, SortKey, SortOrder, StatusFilter};
pub use pipeline::select;
pub use stats::TaskCounts;
