//! HTTP surface.
//!
//! Public routes cover liveness, registration and login. Everything else
//! requires `Authorization: Bearer <token>`, resolved per request by the
//! [`auth::Authenticated`] extractor. Responses use a `{ success, ... }`
//! envelope; failures map to [`error::ApiErrorResponse`].

pub mod auth;
pub mod dto;
pub mod error;
mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
