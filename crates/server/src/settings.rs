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
use service::setting_service;

/// Request body for creating or replacing a setting.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SettingInput {
    pub key_name: String,
    pub value: String,
}

#[utoipa::path(get, path = "/setting/", tag = "setting",
    responses((status = 200, description = "All settings", body = [crate::openapi::SettingDoc])))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::setting::Model>>, ApiError> {
    match setting_service::list_settings(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list settings");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list settings failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(post, path = "/setting/", tag = "setting", request_body = SettingInput,
    responses((status = 201, description = "Setting created", body = crate::openapi::SettingDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<SettingInput>,
) -> Result<(StatusCode, Json<models::setting::Model>), ApiError> {
    match setting_service::create_setting(&state.db, &input.key_name, &input.value).await {
        Ok(m) => {
            info!(id = m.setting_id, key = %m.key_name, "created setting");
            Ok((StatusCode::CREATED, Json(m)))
        }
        // duplicate key_name is rejected by the unique constraint
        Err(e) => {
            error!(err = %e, "create setting failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(get, path = "/setting/{id}", tag = "setting",
    params(("id" = i32, Path, description = "The ID of the setting")),
    responses((status = 200, body = crate::openapi::SettingDoc), (status = 404, description = "Setting not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::setting::Model>, ApiError> {
    match setting_service::get_setting(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::not_found(format!("Setting {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "get setting failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(put, path = "/setting/{id}", tag = "setting", request_body = SettingInput,
    params(("id" = i32, Path, description = "The ID of the setting")),
    responses((status = 200, body = crate::openapi::SettingDoc), (status = 404, description = "Setting not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<SettingInput>,
) -> Result<Json<models::setting::Model>, ApiError> {
    match setting_service::update_setting(&state.db, id, &input.key_name, &input.value).await {
        Ok(m) => {
            info!(id = m.setting_id, "updated setting");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found(format!("Setting {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "update setting failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(delete, path = "/setting/{id}", tag = "setting",
    params(("id" = i32, Path, description = "The ID of the setting")),
    responses((status = 200, description = "Setting deleted"), (status = 404, description = "Setting not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> (StatusCode, Json<serde_json::Value>) {
    match setting_service::delete_setting(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted setting");
            (
                StatusCode::OK,
                Json(serde_json::json!({"message": "Setting deleted successfully"})),
            )
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Setting not found"})),
        ),
        Err(e) => {
            error!(err = %e, id, "delete setting failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Internal Server Error"})),
            )
        }
    }
}
