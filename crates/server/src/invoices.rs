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
use service::invoice_service;

/// Request body for creating an invoice. `issued_at` is stamped by the
/// server at creation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateInvoiceInput {
    pub client_id: i32,
    pub iva: f64,
    pub total: f64,
    pub total_with_iva: f64,
}

/// Request body for replacing an invoice. `issued_at` travels as
/// `YYYY-MM-DD HH:MM:SS` text.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateInvoiceInput {
    pub client_id: i32,
    pub issued_at: String,
    pub iva: f64,
    pub total: f64,
    pub total_with_iva: f64,
}

#[utoipa::path(get, path = "/invoice/", tag = "invoice",
    responses((status = 200, description = "All invoices", body = [crate::openapi::InvoiceDoc])))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::invoice::Model>>, ApiError> {
    match invoice_service::list_invoices(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list invoices");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list invoices failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(post, path = "/invoice/", tag = "invoice", request_body = CreateInvoiceInput,
    responses((status = 201, description = "Invoice created", body = crate::openapi::InvoiceDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateInvoiceInput>,
) -> Result<(StatusCode, Json<models::invoice::Model>), ApiError> {
    match invoice_service::create_invoice(
        &state.db,
        input.client_id,
        input.iva,
        input.total,
        input.total_with_iva,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.invoice_id, "created invoice");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) => {
            error!(err = %e, "create invoice failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(get, path = "/invoice/{id}", tag = "invoice",
    params(("id" = i32, Path, description = "The ID of the invoice")),
    responses((status = 200, body = crate::openapi::InvoiceDoc), (status = 404, description = "Invoice not found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::invoice::Model>, ApiError> {
    match invoice_service::get_invoice(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(ApiError::not_found(format!("Invoice {} not found.", id))),
        Err(e) => {
            error!(err = %e, id, "get invoice failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(put, path = "/invoice/{id}", tag = "invoice", request_body = UpdateInvoiceInput,
    params(("id" = i32, Path, description = "The ID of the invoice")),
    responses((status = 200, body = crate::openapi::InvoiceDoc), (status = 404, description = "Invoice not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateInvoiceInput>,
) -> Result<Json<models::invoice::Model>, ApiError> {
    match invoice_service::update_invoice(
        &state.db,
        id,
        input.client_id,
        &input.issued_at,
        input.iva,
        input.total,
        input.total_with_iva,
    )
    .await
    {
        Ok(m) => {
            info!(id = m.invoice_id, "updated invoice");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => {
            Err(ApiError::not_found(format!("Invoice {} not found.", id)))
        }
        // a malformed issued_at lands here too and answers as a generic 500
        Err(e) => {
            error!(err = %e, id, "update invoice failed");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(delete, path = "/invoice/{id}", tag = "invoice",
    params(("id" = i32, Path, description = "The ID of the invoice")),
    responses((status = 200, description = "Invoice deleted"), (status = 404, description = "Invoice not found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> (StatusCode, Json<serde_json::Value>) {
    match invoice_service::delete_invoice(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted invoice");
            (
                StatusCode::OK,
                Json(serde_json::json!({"message": format!("Invoice {} deleted successfully.", id)})),
            )
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Invoice with ID {} not found.", id)})),
        ),
        Err(e) => {
            error!(err = %e, id, "delete invoice failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Internal Server Error"})),
            )
        }
    }
}
