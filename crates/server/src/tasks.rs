use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::state::ServerState;
use service::errors::ServiceError;
use service::task_service;

/// Request body for creating or replacing a task.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TaskInput {
    pub description: String,
    pub employee_id: i32,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub work_id: i32,
}

#[utoipa::path(get, path = "/task/", tag = "task",
    responses((status = 200, description = "All tasks", body = [crate::openapi::TaskDoc])))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::task::Model>>, ApiError> {
    match task_service::list_tasks(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list tasks");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list tasks failed");
            Err(ApiError::Internal)
        }
    }
}

// Creating a task answers 200, not 201.
#[utoipa::path(post, path = "/task/", tag = "task", request_body = TaskInput,
    responses((status = 200, description = "Task created", body = crate::openapi::TaskDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<TaskInput>,
) -> Result<Json<models::task::Model>, ApiError> {
    match task_service::create_task(
        &state.db,
        &input.description,
        input.employee_id,
        &input.start_date,
        input.end_date.as_deref(),
        input.status.as_deref(),
        input.work_id,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.task_id, "created task");
            Ok(Json(m))
        }
        Err(e) => {
            error!(err = %e, "create task failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(get, path = "/task/{id}", tag = "task",
    params(("id" = i32, Path, description = "The ID of the task")),
    responses((status = 200, body = crate::openapi::TaskDoc), (status = 404, description = "Task not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::task::Model>, ApiError> {
    match task_service::get_task(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::not_found(format!("Task {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "get task failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(put, path = "/task/{id}", tag = "task", request_body = TaskInput,
    params(("id" = i32, Path, description = "The ID of the task")),
    responses((status = 200, body = crate::openapi::TaskDoc), (status = 404, description = "Task not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<TaskInput>,
) -> Result<Json<models::task::Model>, ApiError> {
    match task_service::update_task(
        &state.db,
        id,
        &input.description,
        input.employee_id,
        &input.start_date,
        input.end_date.as_deref(),
        input.status.as_deref(),
        input.work_id,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.task_id, "updated task");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found(format!("Task {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "update task failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(delete, path = "/task/{id}", tag = "task",
    params(("id" = i32, Path, description = "The ID of the task")),
    responses((status = 200, description = "Task deleted"), (status = 404, description = "Task not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match task_service::delete_task(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted task");
            Ok(Json(serde_json::json!({"message": format!("Task {} deleted successfully.", id)})))
        }
        Ok(false) => Err(ApiError::not_found(format!("Task {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "delete task failed");
            Err(ApiError::Internal)
        }
    }
}
