//! Step definitions for task query scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
