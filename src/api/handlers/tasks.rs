//! Task endpoints under `/api/tasks`.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::{
    auth::Authenticated,
    dto::{CreateTaskBody, DeletedTask, Envelope, TaskListQuery, TaskResponse, UpdateTaskBody},
    error::ApiErrorResponse,
    state::AppState,
};
use crate::task::{domain::TaskId, query::TaskCounts};

type ApiResult<T> = Result<T, ApiErrorResponse>;

fn parse_task_id(raw: &str) -> ApiResult<TaskId> {
    Uuid::parse_str(raw)
        .map(TaskId::from_uuid)
        .map_err(|_| ApiErrorResponse::not_found("Task not found"))
}

/// `GET /api/tasks`: every task newest first, or the selection described by
/// the query string.
pub async fn list_tasks(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
    query: Result<Query<TaskListQuery>, QueryRejection>,
) -> ApiResult<Json<Envelope<Vec<TaskResponse>>>> {
    let Query(params) = query?;
    let tasks = if params.is_empty() {
        state.tasks.list_tasks().await?
    } else {
        let spec = params.into_filter_spec()?;
        state.tasks.query_tasks(&spec).await?
    };

    let now = state.tasks.now();
    let body = tasks
        .iter()
        .map(|task| TaskResponse::from_task(task, now))
        .collect();
    Ok(Json(Envelope::list(body)))
}

/// `GET /api/tasks/stats`: counts by status and completion rate.
pub async fn task_stats(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
) -> ApiResult<Json<Envelope<TaskCounts>>> {
    let counts = state.tasks.task_counts().await?;
    Ok(Json(Envelope::new(counts)))
}

/// `POST /api/tasks`: creates a task owned by the caller.
pub async fn create_task(
    State(state): State<AppState>,
    Authenticated(caller): Authenticated,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<TaskResponse>>)> {
    let Json(body) = payload?;
    let task = state
        .tasks
        .create_task(body.into(), caller.user_id())
        .await?;

    let response = TaskResponse::from_task(&task, state.tasks.now());
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(response).with_message("Task created successfully")),
    ))
}

/// `GET /api/tasks/{id}`.
pub async fn get_task(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Envelope<TaskResponse>>> {
    let task = state.tasks.get_task(parse_task_id(&raw_id)?).await?;
    Ok(Json(Envelope::new(TaskResponse::from_task(
        &task,
        state.tasks.now(),
    ))))
}

/// `PUT /api/tasks/{id}`: partial update.
pub async fn update_task(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> ApiResult<Json<Envelope<TaskResponse>>> {
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;
    let task = state.tasks.update_task(id, body.into()).await?;

    let response = TaskResponse::from_task(&task, state.tasks.now());
    Ok(Json(
        Envelope::new(response).with_message("Task updated successfully"),
    ))
}

/// `DELETE /api/tasks/{id}`.
pub async fn delete_task(
    State(state): State<AppState>,
    Authenticated(_caller): Authenticated,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Envelope<DeletedTask>>> {
    let id = parse_task_id(&raw_id)?;
    state.tasks.delete_task(id).await?;
    Ok(Json(
        Envelope::new(DeletedTask { id }).with_message("Task deleted successfully"),
    ))
}
