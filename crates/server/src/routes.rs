use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::state::ServerState;
use crate::{invoice_items, invoices, openapi, settings, tasks, vehicles, works};

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthDoc)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, the six CRUD resources, and
/// the Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let vehicle = Router::new()
        .route("/vehicle/", get(vehicles::list).post(vehicles::create))
        .route(
            "/vehicle/:id",
            get(vehicles::get).put(vehicles::update).delete(vehicles::delete),
        );

    let work = Router::new()
        .route("/work/", get(works::list).post(works::create))
        .route("/work/:id", get(works::get).put(works::update).delete(works::delete));

    let task = Router::new()
        .route("/task/", get(tasks::list).post(tasks::create))
        .route("/task/:id", get(tasks::get).put(tasks::update).delete(tasks::delete));

    let invoice = Router::new()
        .route("/invoice/", get(invoices::list).post(invoices::create))
        .route(
            "/invoice/:id",
            get(invoices::get).put(invoices::update).delete(invoices::delete),
        );

    let invoice_item = Router::new()
        .route("/invoice_item/", get(invoice_items::list).post(invoice_items::create))
        .route(
            "/invoice_item/:id",
            get(invoice_items::get)
                .put(invoice_items::update)
                .delete(invoice_items::delete),
        );

    let setting = Router::new()
        .route("/setting/", get(settings::list).post(settings::create))
        .route(
            "/setting/:id",
            get(settings::get).put(settings::update).delete(settings::delete),
        );

    // Compose
    Router::new()
        .route("/health", get(health))
        .merge(vehicle)
        .merge(work)
        .merge(task)
        .merge(invoice)
        .merge(invoice_item)
        .merge(setting)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
