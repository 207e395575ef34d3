//! Registration, login, logout and bearer token tests.

use super::helpers::{app, register, send};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_returns_user_and_token(app: Router) {
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/register",
        None,
        Some(json!({ "name": "Ada Lovelace", "email": "Ada@Example.com", "password": "s3cret!" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful.");
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"].get("password").is_none());
    assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_conflicts(app: Router) {
    register(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/register",
        None,
        Some(json!({ "name": "Impostor", "email": "ADA@example.com", "password": "s3cret!" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User already exists");
}

#[rstest]
#[case::short_password(json!({ "name": "Ada", "email": "ada@example.com", "password": "abc" }))]
#[case::bad_email(json!({ "name": "Ada", "email": "not-an-email", "password": "s3cret!" }))]
#[case::blank_name(json!({ "name": "  ", "email": "ada@example.com", "password": "s3cret!" }))]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_registration_is_rejected(app: Router, #[case] payload: serde_json::Value) {
    let (status, body) = send(&app, Method::POST, "/api/user/register", None, Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_rejected(app: Router) {
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/login",
        None,
        Some(json!({ "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_BODY");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_issues_a_new_token(app: Router) {
    let account = register(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "s3cret!" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful.");
    assert_eq!(body["data"]["id"], account.id.as_str());
    assert_ne!(body["token"], account.token.as_str());
}

#[rstest]
#[case::wrong_password("ada@example.com", "wrong-pass")]
#[case::unknown_email("grace@example.com", "s3cret!")]
#[tokio::test(flavor = "multi_thread")]
async fn bad_credentials_are_unauthorized(
    app: Router,
    #[case] email: &str,
    #[case] password: &str,
) {
    register(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn protected_routes_require_a_token(app: Router) {
    let (status, body) = send(&app, Method::GET, "/api/tasks", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, no token provided");

    let (status, body) = send(&app, Method::GET, "/api/user", Some("bogus"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, token failed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_revokes_the_token(app: Router) {
    let account = register(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/logout",
        Some(&account.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");

    let (status, _) = send(&app, Method::GET, "/api/tasks", Some(&account.token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_list_is_sorted_by_name(app: Router) {
    let grace = register(&app, "Grace Hopper", "grace@example.com").await;
    register(&app, "Ada Lovelace", "ada@example.com").await;

    let (status, body) = send(&app, Method::GET, "/api/user", Some(&grace.token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "Ada Lovelace");
    assert_eq!(body["data"][1]["name"], "Grace Hopper");
}
