//! Task CRUD, validation, filtering and statistics tests.

use super::helpers::{Account, app, create_task, days_from_now, register, send, titles};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::{fixture, rstest};
use serde_json::json;

struct Signed {
    app: Router,
    ada: Account,
}

#[fixture]
async fn signed(app: Router) -> Signed {
    let ada = register(&app, "Ada Lovelace", "ada@example.com").await;
    Signed { app, ada }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_fetch_task(#[future] signed: Signed) {
    let Signed { app, ada } = signed.await;

    let created = create_task(&app, &ada, "Write report", json!({})).await;
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["priority"], "Medium");
    assert_eq!(created["assignedUser"]["id"], ada.id.as_str());
    assert_eq!(created["createdBy"]["name"], "Ada Lovelace");
    assert_eq!(created["isOverdue"], false);

    let id = created["id"].as_str().expect("task id");
    let (status, body) = send(&app, Method::GET, &format!("/api/tasks/{id}"), Some(&ada.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Write report");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_supplied_fields(#[future] signed: Signed) {
    let Signed { app, ada } = signed.await;
    let created = create_task(&app, &ada, "Write report", json!({})).await;
    let id = created["id"].as_str().expect("task id");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/tasks/{id}"),
        Some(&ada.token),
        Some(json!({ "status": "Completed", "priority": "High" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task updated successfully");
    assert_eq!(body["data"]["status"], "Completed");
    assert_eq!(body["data"]["priority"], "High");
    assert_eq!(body["data"]["title"], "Write report");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task(#[future] signed: Signed) {
    let Signed { app, ada } = signed.await;
    let created = create_task(&app, &ada, "Throwaway", json!({})).await;
    let id = created["id"].as_str().expect("task id");
    let uri = format!("/api/tasks/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&ada.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, body) = send(&app, Method::GET, &uri, Some(&ada.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");
}

#[rstest]
#[case::unknown_uuid("/api/tasks/00000000-0000-4000-8000-000000000000")]
#[case::malformed_id("/api/tasks/not-a-uuid")]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_is_not_found(#[future] signed: Signed, #[case] uri: &str) {
    let Signed { app, ada } = signed.await;
    let (status, _) = send(&app, Method::GET, uri, Some(&ada.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case::blank_title(json!({ "title": "   " }))]
#[case::past_due(json!({ "dueDate": days_from_now(-2) }))]
#[case::unknown_status(json!({ "status": "Someday" }))]
#[case::unknown_assignee(json!({ "assignedUser": "00000000-0000-4000-8000-000000000000" }))]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_task_is_rejected(#[future] signed: Signed, #[case] overrides: serde_json::Value) {
    let Signed { app, ada } = signed.await;
    let mut payload = json!({
        "title": "Valid title",
        "description": "Valid description",
        "assignedUser": ada.id,
        "dueDate": days_from_now(3),
    });
    if let (Some(target), serde_json::Value::Object(fields)) = (payload.as_object_mut(), overrides) {
        target.extend(fields);
    }

    let (status, body) = send(&app, Method::POST, "/api/tasks", Some(&ada.token), Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_searches_and_sorts(#[future] signed: Signed) {
    let Signed { app, ada } = signed.await;
    create_task(&app, &ada, "beta", json!({ "status": "Completed" })).await;
    create_task(&app, &ada, "Alpha", json!({ "description": "quarterly numbers" })).await;
    create_task(&app, &ada, "gamma", json!({ "status": "In Progress" })).await;

    let (status, body) = send(&app, Method::GET, "/api/tasks", Some(&ada.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(titles(&body), ["gamma", "Alpha", "beta"]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/tasks?sortBy=title&sortOrder=asc",
        Some(&ada.token),
        None,
    )
    .await;
    assert_eq!(titles(&body), ["Alpha", "beta", "gamma"]);

    let (_, body) = send(&app, Method::GET, "/api/tasks?status=Completed", Some(&ada.token), None).await;
    assert_eq!(titles(&body), ["beta"]);

    let (_, body) = send(&app, Method::GET, "/api/tasks?search=QUARTERLY", Some(&ada.token), None).await;
    assert_eq!(titles(&body), ["Alpha"]);

    let (_, body) = send(&app, Method::GET, "/api/tasks?search=zzz", Some(&ada.token), None).await;
    assert_eq!(body["count"], 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_assignee_and_due_range(#[future] signed: Signed) {
    let Signed { app, ada } = signed.await;
    let grace = register(&app, "Grace Hopper", "grace@example.com").await;
    create_task(&app, &ada, "Soon", json!({ "dueDate": days_from_now(1) })).await;
    create_task(&app, &ada, "Later", json!({ "dueDate": days_from_now(30), "assignedUser": grace.id })).await;

    let uri = format!("/api/tasks?assignedUser={}", grace.id);
    let (_, body) = send(&app, Method::GET, &uri, Some(&ada.token), None).await;
    assert_eq!(titles(&body), ["Later"]);

    let due_to = (chrono::Utc::now() + chrono::TimeDelta::days(10)).format("%Y-%m-%d");
    let uri = format!("/api/tasks?dueDateTo={due_to}");
    let (_, body) = send(&app, Method::GET, &uri, Some(&ada.token), None).await;
    assert_eq!(titles(&body), ["Soon"]);

    let (status, body) = send(&app, Method::GET, "/api/tasks?dueDateFrom=someday", Some(&ada.token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_count_tasks_by_status(#[future] signed: Signed) {
    let Signed { app, ada } = signed.await;
    create_task(&app, &ada, "one", json!({ "status": "Completed" })).await;
    create_task(&app, &ada, "two", json!({ "status": "Pending" })).await;
    create_task(&app, &ada, "three", json!({ "status": "In Progress" })).await;

    let (status, body) = send(&app, Method::GET, "/api/tasks/stats", Some(&ada.token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "all": 3, "pending": 1, "inProgress": 1, "completed": 1, "completionRate": 33 })
    );
}
