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
use service::invoice_item_service;

/// Request body for creating or replacing an invoice item.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct InvoiceItemInput {
    pub cost: f64,
    pub description: String,
    pub invoice_id: i32,
    pub task_id: i32,
}

#[utoipa::path(get, path = "/invoice_item/", tag = "invoice_item",
    responses((status = 200, description = "All invoice items", body = [crate::openapi::InvoiceItemDoc])))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::invoice_item::Model>>, ApiError> {
    match invoice_item_service::list_invoice_items(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list invoice items");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list invoice items failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(post, path = "/invoice_item/", tag = "invoice_item", request_body = InvoiceItemInput,
    responses((status = 201, description = "Invoice item created", body = crate::openapi::InvoiceItemDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<InvoiceItemInput>,
) -> Result<(StatusCode, Json<models::invoice_item::Model>), ApiError> {
    match invoice_item_service::create_invoice_item(
        &state.db,
        input.cost,
        &input.description,
        input.invoice_id,
        input.task_id,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.item_id, "created invoice item");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) => {
            error!(err = %e, "create invoice item failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(get, path = "/invoice_item/{id}", tag = "invoice_item",
    params(("id" = i32, Path, description = "The ID of the invoice item")),
    responses((status = 200, body = crate::openapi::InvoiceItemDoc), (status = 404, description = "Invoice item not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::invoice_item::Model>, ApiError> {
    match invoice_item_service::get_invoice_item(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::not_found(format!("Invoice item {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "get invoice item failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(put, path = "/invoice_item/{id}", tag = "invoice_item", request_body = InvoiceItemInput,
    params(("id" = i32, Path, description = "The ID of the invoice item")),
    responses((status = 200, body = crate::openapi::InvoiceItemDoc), (status = 404, description = "Invoice item not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<InvoiceItemInput>,
) -> Result<Json<models::invoice_item::Model>, ApiError> {
    match invoice_item_service::update_invoice_item(
        &state.db,
        id,
        input.cost,
        &input.description,
        input.invoice_id,
        input.task_id,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.item_id, "updated invoice item");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => {
            Err(ApiError::not_found(format!("Invoice item {} not found.", id)))
        }
        Err(e) => {
            error!(err = %e, id, "update invoice item failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(delete, path = "/invoice_item/{id}", tag = "invoice_item",
    params(("id" = i32, Path, description = "The ID of the invoice item")),
    responses((status = 200, description = "Invoice item deleted"), (status = 404, description = "Invoice item not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> (StatusCode, Json<serde_json::Value>) {
    match invoice_item_service::delete_invoice_item(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted invoice item");
            (
                StatusCode::OK,
                Json(serde_json::json!({"message": format!("Invoice item {} deleted successfully.", id)})),
            )
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Invoice item with ID {} not found.", id)})),
        ),
        Err(e) => {
            error!(err = %e, id, "delete invoice item failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Internal Server Error"})),
            )
        }
    }
}
