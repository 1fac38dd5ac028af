use chrono::{NaiveDateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use models::invoice;

// `issued_at` travels as `YYYY-MM-DD HH:MM:SS` text on update. A malformed
// value is an internal failure, not a validation one.
fn parse_issued_at(value: &str) -> Result<NaiveDateTime, ServiceError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| ServiceError::Internal(format!("invalid issued_at: {}", e)))
}

/// List every invoice in storage order.
pub async fn list_invoices(db: &DatabaseConnection) -> Result<Vec<invoice::Model>, ServiceError> {
    invoice::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get invoice by id.
pub async fn get_invoice(db: &DatabaseConnection, id: i32) -> Result<Option<invoice::Model>, ServiceError> {
    invoice::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create an invoice. `issued_at` is stamped at creation and is not
/// client-settable here.
pub async fn create_invoice(
    db: &DatabaseConnection,
    client_id: i32,
    iva: f64,
    total: f64,
    total_with_iva: f64,
) -> Result<invoice::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = invoice::ActiveModel {
        client_id: Set(client_id),
        issued_at: Set(Utc::now().into()),
        iva: Set(iva),
        total: Set(total),
        total_with_iva: Set(total_with_iva),
        ..Default::default()
    };
    let created = match am.insert(&txn).await {
        Ok(m) => m,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// Replace every mutable field of an invoice, including `issued_at`.
pub async fn update_invoice(
    db: &DatabaseConnection,
    id: i32,
    client_id: i32,
    issued_at: &str,
    iva: f64,
    total: f64,
    total_with_iva: f64,
) -> Result<invoice::Model, ServiceError> {
    let issued = Utc.from_utc_datetime(&parse_issued_at(issued_at)?);

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match invoice::Entity::find_by_id(id).one(&txn).await {
        Ok(i) => i,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Err(ServiceError::not_found("invoice"));
    };
    let mut am: invoice::ActiveModel = found.into();
    am.client_id = Set(client_id);
    am.issued_at = Set(issued.into());
    am.iva = Set(iva);
    am.total = Set(total);
    am.total_with_iva = Set(total_with_iva);
    let updated = match am.update(&txn).await {
        Ok(m) => m,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Hard delete an invoice. Returns false when the id does not exist.
pub async fn delete_invoice(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match invoice::Entity::find_by_id(id).one(&txn).await {
        Ok(i) => i,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Ok(false);
    };
    if let Err(e) = found.delete(&txn).await {
        let _ = txn.rollback().await;
        return Err(ServiceError::Db(e.to_string()));
    }
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}
