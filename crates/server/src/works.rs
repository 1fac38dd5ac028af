use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::state::ServerState;
use service::errors::ServiceError;
use service::work_service;

/// Request body for creating or replacing a work. Dates travel as
/// `YYYY-MM-DD` text; an impossible calendar date is a 400.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct WorkInput {
    pub cost: f64,
    pub description: String,
    pub end_date: String,
    pub start_date: String,
    pub status: Option<String>,
    pub vehicle_id: i32,
}

#[utoipa::path(get, path = "/work/", tag = "work",
    responses((status = 200, description = "All works", body = [crate::openapi::WorkDoc])))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::work::Model>>, ApiError> {
    match work_service::list_works(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list works");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list works failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(post, path = "/work/", tag = "work", request_body = WorkInput,
    responses((status = 201, description = "Work created", body = crate::openapi::WorkDoc),
        (status = 400, description = "Malformed date")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<WorkInput>,
) -> Result<(StatusCode, Json<models::work::Model>), ApiError> {
    match work_service::create_work(
        &state.db,
        input.cost,
        &input.description,
        &input.end_date,
        &input.start_date,
        input.status.as_deref(),
        input.vehicle_id,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.work_id, "created work");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(ServiceError::Validation(msg)) => Err(ApiError::validation(msg)),
        Err(e) => {
            error!(err = %e, "create work failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(get, path = "/work/{id}", tag = "work",
    params(("id" = i32, Path, description = "The ID of the work")),
    responses((status = 200, body = crate::openapi::WorkDoc), (status = 404, description = "Work not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::work::Model>, ApiError> {
    match work_service::get_work(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::not_found(format!("Work {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "get work failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(put, path = "/work/{id}", tag = "work", request_body = WorkInput,
    params(("id" = i32, Path, description = "The ID of the work")),
    responses((status = 200, body = crate::openapi::WorkDoc),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Work not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<WorkInput>,
) -> Result<Json<models::work::Model>, ApiError> {
    match work_service::update_work(
        &state.db,
        id,
        input.cost,
        &input.description,
        &input.end_date,
        &input.start_date,
        input.status.as_deref(),
        input.vehicle_id,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.work_id, "updated work");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found(format!("Work {} not found.", id))),
        Err(ServiceError::Validation(msg)) => Err(ApiError::validation(msg)),
        Err(e) => {
            error!(err = %e, id, "update work failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(delete, path = "/work/{id}", tag = "work",
    params(("id" = i32, Path, description = "The ID of the work")),
    responses((status = 200, description = "Work deleted"), (status = 404, description = "Work not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> (StatusCode, Json<serde_json::Value>) {
    match work_service::delete_work(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted work");
            (
                StatusCode::OK,
                Json(serde_json::json!({"message": format!("Work {} deleted successfully.", id)})),
            )
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Work with ID {} not found.", id)})),
        ),
        Err(e) => {
            error!(err = %e, id, "delete work failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Internal Server Error"})),
            )
        }
    }
}
