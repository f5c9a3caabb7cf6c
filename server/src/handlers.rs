use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use todo_core::{PageRequest, Todo, TodoDraft, TodoId};
use tracing::info;

use crate::error::ApiError;
use crate::responses::{ErrorResponse, HealthResponse, MessageResponse, TodoListResponse};
use crate::AppState;

pub(crate) const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// First value of `key` in a decoded query string. Later repeats are ignored.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::invalid_id())?;
    raw.parse().map_err(|_| ApiError::invalid_id())
}

pub async fn list_todos(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<TodoListResponse> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let request =
        PageRequest::from_query(first_value(&pairs, "page"), first_value(&pairs, "limit"));
    let page = state.store.list_page(request).await;
    Json(page.into())
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(draft) = payload?;
    let todo = state.store.insert(draft).await;

    info!(id = todo.id, title = %todo.title, "created todo");

    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(id)?;
    let todo = state.store.find_by_id(id).await?;
    Ok(Json(todo))
}

pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<TodoDraft>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(id)?;
    let Json(draft) = payload?;
    let todo = state.store.replace_by_id(id, draft).await?;

    info!(
        id = todo.id,
        title = %todo.title,
        completed = todo.completed,
        "updated todo"
    );

    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(id)?;
    state.store.delete_by_id(id).await?;

    info!(id, "deleted todo");

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
