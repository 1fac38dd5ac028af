use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use models::work;

// Works carry their dates as `YYYY-MM-DD` text on the wire; a calendar date
// that does not exist must be rejected as a validation error, not a generic
// failure.
fn parse_work_date(field: &str, value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| ServiceError::Validation(format!("invalid {}: {}", field, e)))
}

/// List every work in storage order.
pub async fn list_works(db: &DatabaseConnection) -> Result<Vec<work::Model>, ServiceError> {
    work::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get work by id.
pub async fn get_work(db: &DatabaseConnection, id: i32) -> Result<Option<work::Model>, ServiceError> {
    work::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a work. Dates are parsed from `YYYY-MM-DD` text.
pub async fn create_work(
    db: &DatabaseConnection,
    cost: f64,
    description: &str,
    end_date: &str,
    start_date: &str,
    status: Option<&str>,
    vehicle_id: i32,
) -> Result<work::Model, ServiceError> {
    let start = parse_work_date("start_date", start_date)?;
    let end = parse_work_date("end_date", end_date)?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = work::ActiveModel {
        cost: Set(cost),
        created_at: Set(Utc::now().into()),
        description: Set(description.to_string()),
        end_date: Set(end),
        start_date: Set(start),
        status: Set(status.map(str::to_string)),
        vehicle_id: Set(vehicle_id),
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

/// Replace every mutable field of a work. Malformed dates fail validation
/// before anything is written.
pub async fn update_work(
    db: &DatabaseConnection,
    id: i32,
    cost: f64,
    description: &str,
    end_date: &str,
    start_date: &str,
    status: Option<&str>,
    vehicle_id: i32,
) -> Result<work::Model, ServiceError> {
    let start = parse_work_date("start_date", start_date)?;
    let end = parse_work_date("end_date", end_date)?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match work::Entity::find_by_id(id).one(&txn).await {
        Ok(w) => w,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Err(ServiceError::not_found("work"));
    };
    let mut am: work::ActiveModel = found.into();
    am.cost = Set(cost);
    am.description = Set(description.to_string());
    am.end_date = Set(end);
    am.start_date = Set(start);
    am.status = Set(status.map(str::to_string));
    am.vehicle_id = Set(vehicle_id);
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

/// Hard delete a work. Returns false when the id does not exist.
pub async fn delete_work(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match work::Entity::find_by_id(id).one(&txn).await {
        Ok(w) => w,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::vehicle_service;
    use uuid::Uuid;

    async fn fixture_vehicle(db: &DatabaseConnection) -> Result<i32, anyhow::Error> {
        let plate = format!("svc-work-{}", Uuid::new_v4());
        let v = vehicle_service::create_vehicle(db, "Seat", 1, &plate, "Ibiza", 2019).await?;
        Ok(v.vehicle_id)
    }

    #[tokio::test]
    async fn work_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let vehicle_id = fixture_vehicle(&db).await?;

        let w = create_work(&db, 120.5, "brake pads", "2024-02-02", "2024-02-01", Some("open"), vehicle_id).await?;
        assert_eq!(w.cost, 120.5);
        assert_eq!(w.description, "brake pads");
        assert_eq!(w.start_date.to_string(), "2024-02-01");
        assert_eq!(w.end_date.to_string(), "2024-02-02");
        assert_eq!(w.status.as_deref(), Some("open"));

        let found = get_work(&db, w.work_id).await?.unwrap();
        assert_eq!(found, w);

        let updated = update_work(&db, w.work_id, 99.0, "brake pads + discs", "2024-02-05", "2024-02-01", Some("done"), vehicle_id).await?;
        assert_eq!(updated.cost, 99.0);
        assert_eq!(updated.end_date.to_string(), "2024-02-05");
        assert_eq!(updated.status.as_deref(), Some("done"));

        assert!(delete_work(&db, w.work_id).await?);
        assert!(get_work(&db, w.work_id).await?.is_none());
        assert!(vehicle_service::delete_vehicle(&db, vehicle_id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn work_create_rejects_impossible_date() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let vehicle_id = fixture_vehicle(&db).await?;

        // Feb 30 is not a calendar date
        let err = create_work(&db, 10.0, "oil", "2024-03-01", "2024-02-30", None, vehicle_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        vehicle_service::delete_vehicle(&db, vehicle_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn work_update_rejects_malformed_date_without_writing() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let vehicle_id = fixture_vehicle(&db).await?;

        let w = create_work(&db, 10.0, "oil", "2024-03-01", "2024-02-28", None, vehicle_id).await?;
        let err = update_work(&db, w.work_id, 20.0, "oil", "not-a-date", "2024-02-28", None, vehicle_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // nothing was written
        let untouched = get_work(&db, w.work_id).await?.unwrap();
        assert_eq!(untouched.cost, 10.0);
        assert_eq!(untouched.end_date.to_string(), "2024-03-01");

        delete_work(&db, w.work_id).await?;
        vehicle_service::delete_vehicle(&db, vehicle_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn work_update_missing_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = update_work(&db, i32::MAX, 1.0, "x", "2024-01-02", "2024-01-01", None, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
