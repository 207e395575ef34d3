//! Shared request helpers for HTTP integration tests.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{TimeDelta, Utc};
use http_body_util::BodyExt;
use rstest::fixture;
use serde_json::{Value, json};
use taskboard::api::{AppState, create_router};
use tower::ServiceExt;

/// Router over fresh in-memory storage.
#[fixture]
pub fn app() -> Router {
    create_router(AppState::in_memory(TimeDelta::hours(1)))
}

/// Sends one request and decodes the response body.
///
/// Empty bodies decode as `Value::Null` and non-JSON bodies as a string.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

/// A signed-in user.
pub struct Account {
    pub id: String,
    pub token: String,
}

/// Registers a user and returns their id and bearer token.
pub async fn register(app: &Router, name: &str, email: &str) -> Account {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/user/register",
        None,
        Some(json!({ "name": name, "email": email, "password": "s3cret!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    Account {
        id: body["data"]["id"].as_str().expect("user id").to_owned(),
        token: body["token"].as_str().expect("token").to_owned(),
    }
}

/// RFC 3339 timestamp `days` from now.
pub fn days_from_now(days: i64) -> String {
    (Utc::now() + TimeDelta::days(days)).to_rfc3339()
}

/// Creates a task assigned to `owner`, merging `extra` into the body.
pub async fn create_task(app: &Router, owner: &Account, title: &str, extra: Value) -> Value {
    let mut body = json!({
        "title": title,
        "description": format!("{title} details"),
        "assignedUser": owner.id,
        "dueDate": days_from_now(7),
    });
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), extra) {
        target.extend(fields);
    }
    let (status, created) = send(
        app,
        Method::POST,
        "/api/tasks",
        Some(&owner.token),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "task creation failed: {created}");
    // Keeps creation timestamps distinct so newest-first order is stable.
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    created["data"].clone()
}

/// Titles of the tasks in a list response, in order.
pub fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data should be a list")
        .iter()
        .map(|task| task["title"].as_str().expect("title").to_owned())
        .collect()
}
