use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use models::vehicle;

/// List every vehicle in storage order.
pub async fn list_vehicles(db: &DatabaseConnection) -> Result<Vec<vehicle::Model>, ServiceError> {
    vehicle::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get vehicle by id.
pub async fn get_vehicle(db: &DatabaseConnection, id: i32) -> Result<Option<vehicle::Model>, ServiceError> {
    vehicle::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a vehicle. The id and creation timestamp are storage-assigned.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    brand: &str,
    client_id: i32,
    license_plate: &str,
    model: &str,
    year: i32,
) -> Result<vehicle::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = vehicle::ActiveModel {
        brand: Set(brand.to_string()),
        client_id: Set(client_id),
        created_at: Set(Utc::now().into()),
        license_plate: Set(license_plate.to_string()),
        model: Set(model.to_string()),
        year: Set(year),
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

/// Replace every mutable field of a vehicle.
pub async fn update_vehicle(
    db: &DatabaseConnection,
    id: i32,
    client_id: i32,
    brand: &str,
    license_plate: &str,
    model: &str,
    year: i32,
) -> Result<vehicle::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match vehicle::Entity::find_by_id(id).one(&txn).await {
        Ok(v) => v,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Err(ServiceError::not_found("vehicle"));
    };
    let mut am: vehicle::ActiveModel = found.into();
    am.client_id = Set(client_id);
    am.brand = Set(brand.to_string());
    am.license_plate = Set(license_plate.to_string());
    am.model = Set(model.to_string());
    am.year = Set(year);
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

/// Hard delete a vehicle. Returns false when the id does not exist.
pub async fn delete_vehicle(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match vehicle::Entity::find_by_id(id).one(&txn).await {
        Ok(v) => v,
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
