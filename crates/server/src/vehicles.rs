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
use service::vehicle_service;

/// Request body for creating or replacing a vehicle. The id and
/// `created_at` are storage-assigned and read-only.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct VehicleInput {
    pub brand: String,
    pub client_id: i32,
    pub license_plate: String,
    pub model: String,
    pub year: i32,
}

#[utoipa::path(get, path = "/vehicle/", tag = "vehicle",
    responses((status = 200, description = "All vehicles", body = [crate::openapi::VehicleDoc])))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::vehicle::Model>>, ApiError> {
    match vehicle_service::list_vehicles(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list vehicles");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list vehicles failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(post, path = "/vehicle/", tag = "vehicle", request_body = VehicleInput,
    responses((status = 201, description = "Vehicle created", body = crate::openapi::VehicleDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<VehicleInput>,
) -> Result<(StatusCode, Json<models::vehicle::Model>), ApiError> {
    match vehicle_service::create_vehicle(
        &state.db,
        &input.brand,
        input.client_id,
        &input.license_plate,
        &input.model,
        input.year,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.vehicle_id, plate = %m.license_plate, "created vehicle");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) => {
            error!(err = %e, "create vehicle failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(get, path = "/vehicle/{id}", tag = "vehicle",
    params(("id" = i32, Path, description = "The ID of the vehicle")),
    responses((status = 200, body = crate::openapi::VehicleDoc), (status = 404, description = "Vehicle not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::vehicle::Model>, ApiError> {
    match vehicle_service::get_vehicle(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::not_found(format!("Vehicle with ID {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "get vehicle failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(put, path = "/vehicle/{id}", tag = "vehicle", request_body = VehicleInput,
    params(("id" = i32, Path, description = "The ID of the vehicle")),
    responses((status = 200, body = crate::openapi::VehicleDoc), (status = 404, description = "Vehicle not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<VehicleInput>,
) -> Result<Json<models::vehicle::Model>, ApiError> {
    match vehicle_service::update_vehicle(
        &state.db,
        id,
        input.client_id,
        &input.brand,
        &input.license_plate,
        &input.model,
        input.year,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.vehicle_id, "updated vehicle");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => {
            Err(ApiError::not_found(format!("Vehicle with ID {} not found.", id)))
        }
        Err(e) => {
            error!(err = %e, id, "update vehicle failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(delete, path = "/vehicle/{id}", tag = "vehicle",
    params(("id" = i32, Path, description = "The ID of the vehicle")),
    responses((status = 204, description = "Vehicle deleted"), (status = 404, description = "Vehicle not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    match vehicle_service::delete_vehicle(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted vehicle");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(ApiError::not_found(format!("Vehicle with ID {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "delete vehicle failed");
            Err(ApiError::Internal)
        }
    }
}
