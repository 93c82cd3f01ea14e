pub mod error;
pub mod model;

use crate::AppState;
use crate::domain::{Todo, UpdatedTodo};
use crate::features::route_not_found;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use error::ApiError;
use model::{CreateTodoRequest, MessageBody, UpdateTodoRequest};

// mounted at /api/todo
pub fn todos_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_todos_handler)
                .post(create_todo_handler)
                .fallback(route_not_found),
        )
        .route(
            "/{id}",
            put(update_todo_handler)
                .delete(delete_todo_handler)
                .fallback(route_not_found),
        )
}

// an id that isn't an integer can't match any row
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound("Task not found"))
}

async fn list_todos_handler(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state
        .repo
        .list_todos()
        .await
        .map_err(|e| ApiError::database("Error retrieving data", e))?;

    Ok(Json(todos))
}

#[tracing::instrument(skip(state, payload))]
async fn create_todo_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = payload?;
    let new_todo = request
        .into_new_todo()
        .ok_or(ApiError::BadRequest("Name is required"))?;

    let todo = state
        .repo
        .create_todo(&new_todo)
        .await
        .map_err(|e| ApiError::database("Error inserting data", e))?;

    tracing::info!("Created todo {}", todo);
    Ok((StatusCode::CREATED, Json(todo)))
}

#[tracing::instrument(skip(state, payload))]
async fn update_todo_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<UpdatedTodo>, ApiError> {
    let Json(request) = payload?;
    let changes = request
        .into_changes()
        .ok_or(ApiError::BadRequest(
            "At least one field (name or status) is required",
        ))?;
    let id = parse_id(&raw_id)?;

    let matched = state
        .repo
        .update_todo(id, &changes)
        .await
        .map_err(|e| ApiError::database("Error updating data", e))?;
    if !matched {
        return Err(ApiError::NotFound("Task not found"));
    }

    // the row can vanish between the two statements if someone deletes it
    let todo = state
        .repo
        .get_updated_todo(id)
        .await
        .map_err(|e| ApiError::database("Error updating data", e))?
        .ok_or(ApiError::NotFound("Task not found after update"))?;

    tracing::info!("Updated todo #{}", todo.id);
    Ok(Json(todo))
}

#[tracing::instrument(skip(state))]
async fn delete_todo_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(&raw_id)?;

    let deleted = state
        .repo
        .delete_todo(id)
        .await
        .map_err(|e| ApiError::database("Error deleting data", e))?;
    if !deleted {
        return Err(ApiError::NotFound("Task not found"));
    }

    tracing::info!("Deleted todo #{}", id);
    Ok(Json(MessageBody::new(format!(
        "Task {} deleted successfully",
        id
    ))))
}
