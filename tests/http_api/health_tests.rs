//! Liveness and fallback route tests.

use super::helpers::{app, send};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn root_reports_api_running(app: Router) {
    let (status, body) = send(&app, Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Api running.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_version(app: Router) {
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_route_is_not_found(app: Router) {
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
}
