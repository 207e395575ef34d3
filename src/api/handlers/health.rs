//! Unauthenticated liveness endpoints and the catch-all 404.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

use crate::api::dto::Health;

/// `GET /`.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn root() -> &'static str {
    "Api running."
}

/// `GET /health`.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for unmatched routes.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}
