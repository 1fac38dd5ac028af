//! Wire-level contract tests for the CRUD handlers.
//!
//! The delete contract differs per resource and is asserted exactly:
//! invoices, invoice items, settings and works answer a pass-through body
//! with an `error` key on a missing id, while tasks and vehicles answer
//! through the typed 404 path with a `message` key.
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::build_router;
use server::state::ServerState;
use service::{invoice_service, vehicle_service, work_service};

async fn setup() -> anyhow::Result<(Router, sea_orm::DatabaseConnection)> {
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    let app = build_router(ServerState { db: db.clone() }, CorsLayer::very_permissive());
    Ok((app, db))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_answers_ok() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, _db) = setup().await?;

    let resp = app.oneshot(empty_request("GET", "/health")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn vehicle_create_echoes_fields_and_generates_id() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, _db) = setup().await?;

    let plate = format!("ABC-{}", Uuid::new_v4());
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/vehicle/",
            serde_json::json!({
                "brand": "Toyota",
                "client_id": 1,
                "license_plate": plate,
                "model": "Corolla",
                "year": 2022
            }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert!(body["vehicle_id"].is_i64());
    assert!(body["created_at"].is_string());
    assert_eq!(body["brand"], "Toyota");
    assert_eq!(body["client_id"], 1);
    assert_eq!(body["license_plate"], serde_json::json!(plate));
    assert_eq!(body["model"], "Corolla");
    assert_eq!(body["year"], 2022);

    // fetching the new id yields the same record
    let id = body["vehicle_id"].as_i64().unwrap();
    let resp = app.clone().oneshot(empty_request("GET", &format!("/vehicle/{}", id))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched, body);

    // vehicle delete answers 204 without a body
    let resp = app.clone().oneshot(empty_request("DELETE", &format!("/vehicle/{}", id))).await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // a second delete goes through the typed 404 path
    let resp = app.oneshot(empty_request("DELETE", &format!("/vehicle/{}", id))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], serde_json::json!(format!("Vehicle with ID {} not found.", id)));
    Ok(())
}

#[tokio::test]
async fn task_create_answers_200_not_201() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, db) = setup().await?;

    let plate = format!("tsk-{}", Uuid::new_v4());
    let v = vehicle_service::create_vehicle(&db, "Fiat", 1, &plate, "Panda", 2017).await?;
    let w = work_service::create_work(&db, 50.0, "inspection", "2024-07-02", "2024-07-01", None, v.vehicle_id).await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/task/",
            serde_json::json!({
                "description": "check lights",
                "employee_id": 2,
                "start_date": "2024-07-01",
                "end_date": null,
                "status": "pending",
                "work_id": w.work_id
            }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let task_id = body["task_id"].as_i64().unwrap();

    // task delete answers 200 with a message body
    let resp = app.clone().oneshot(empty_request("DELETE", &format!("/task/{}", task_id))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], serde_json::json!(format!("Task {} deleted successfully.", task_id)));

    work_service::delete_work(&db, w.work_id).await?;
    vehicle_service::delete_vehicle(&db, v.vehicle_id).await?;
    Ok(())
}

#[tokio::test]
async fn work_update_with_impossible_date_is_400() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, db) = setup().await?;

    let plate = format!("wrk-{}", Uuid::new_v4());
    let v = vehicle_service::create_vehicle(&db, "VW", 1, &plate, "Golf", 2016).await?;
    let w = work_service::create_work(&db, 75.0, "clutch", "2024-08-10", "2024-08-01", None, v.vehicle_id).await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/work/{}", w.work_id),
            serde_json::json!({
                "cost": 75.0,
                "description": "clutch",
                "end_date": "2024-08-10",
                "start_date": "2024-02-30",
                "status": null,
                "vehicle_id": v.vehicle_id
            }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    // work delete answers a pass-through body with status
    let resp = app.clone().oneshot(empty_request("DELETE", &format!("/work/{}", w.work_id))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], serde_json::json!(format!("Work {} deleted successfully.", w.work_id)));

    let resp = app.oneshot(empty_request("DELETE", &format!("/work/{}", w.work_id))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], serde_json::json!(format!("Work with ID {} not found.", w.work_id)));

    vehicle_service::delete_vehicle(&db, v.vehicle_id).await?;
    Ok(())
}

#[tokio::test]
async fn invoice_delete_contract_uses_error_key_on_missing() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, db) = setup().await?;

    let inv = invoice_service::create_invoice(&db, 9, 21.0, 200.0, 242.0).await?;

    let resp = app.clone().oneshot(empty_request("DELETE", &format!("/invoice/{}", inv.invoice_id))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body["message"],
        serde_json::json!(format!("Invoice {} deleted successfully.", inv.invoice_id))
    );

    let resp = app.oneshot(empty_request("DELETE", &format!("/invoice/{}", inv.invoice_id))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(
        body["error"],
        serde_json::json!(format!("Invoice with ID {} not found.", inv.invoice_id))
    );
    Ok(())
}

#[tokio::test]
async fn setting_delete_contract_uses_fixed_messages() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, _db) = setup().await?;

    // missing id: pass-through error body
    let resp = app.clone().oneshot(empty_request("DELETE", &format!("/setting/{}", i32::MAX))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Setting not found");

    let key = format!("http_setting_{}", Uuid::new_v4());
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/setting/",
            serde_json::json!({"key_name": key, "value": "on"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["setting_id"].as_i64().unwrap();

    let resp = app.oneshot(empty_request("DELETE", &format!("/setting/{}", id))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Setting deleted successfully");
    Ok(())
}

#[tokio::test]
async fn get_missing_vehicle_is_404_with_message() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let (app, _db) = setup().await?;

    let resp = app.oneshot(empty_request("GET", &format!("/vehicle/{}", i32::MAX))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(
        body["message"],
        serde_json::json!(format!("Vehicle with ID {} not found.", i32::MAX))
    );
    Ok(())
}
