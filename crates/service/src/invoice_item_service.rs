use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use models::invoice_item;

/// List every invoice item in storage order.
pub async fn list_invoice_items(db: &DatabaseConnection) -> Result<Vec<invoice_item::Model>, ServiceError> {
    invoice_item::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get invoice item by id.
pub async fn get_invoice_item(db: &DatabaseConnection, id: i32) -> Result<Option<invoice_item::Model>, ServiceError> {
    invoice_item::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create an invoice item. Referenced invoice and task ids are taken as-is;
/// the database enforces its own constraints.
pub async fn create_invoice_item(
    db: &DatabaseConnection,
    cost: f64,
    description: &str,
    invoice_id: i32,
    task_id: i32,
) -> Result<invoice_item::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = invoice_item::ActiveModel {
        cost: Set(cost),
        description: Set(description.to_string()),
        invoice_id: Set(invoice_id),
        task_id: Set(task_id),
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

/// Replace every mutable field of an invoice item.
pub async fn update_invoice_item(
    db: &DatabaseConnection,
    id: i32,
    cost: f64,
    description: &str,
    invoice_id: i32,
    task_id: i32,
) -> Result<invoice_item::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match invoice_item::Entity::find_by_id(id).one(&txn).await {
        Ok(i) => i,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Err(ServiceError::not_found("invoice item"));
    };
    let mut am: invoice_item::ActiveModel = found.into();
    am.cost = Set(cost);
    am.description = Set(description.to_string());
    am.invoice_id = Set(invoice_id);
    am.task_id = Set(task_id);
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

/// Hard delete an invoice item. Returns false when the id does not exist.
pub async fn delete_invoice_item(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match invoice_item::Entity::find_by_id(id).one(&txn).await {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::{invoice_service, task_service, vehicle_service, work_service};
    use uuid::Uuid;

    struct Fixture {
        vehicle_id: i32,
        work_id: i32,
        task_id: i32,
        invoice_id: i32,
    }

    async fn fixture(db: &DatabaseConnection) -> Result<Fixture, anyhow::Error> {
        let plate = format!("svc-item-{}", Uuid::new_v4());
        let v = vehicle_service::create_vehicle(db, "Ford", 1, &plate, "Focus", 2020).await?;
        let w = work_service::create_work(db, 80.0, "service", "2024-06-02", "2024-06-01", None, v.vehicle_id).await?;
        let t = task_service::create_task(db, "oil change", 3, "2024-06-01", None, None, w.work_id).await?;
        let i = invoice_service::create_invoice(db, 1, 21.0, 80.0, 96.8).await?;
        Ok(Fixture { vehicle_id: v.vehicle_id, work_id: w.work_id, task_id: t.task_id, invoice_id: i.invoice_id })
    }

    async fn teardown(db: &DatabaseConnection, f: &Fixture) -> Result<(), anyhow::Error> {
        invoice_service::delete_invoice(db, f.invoice_id).await?;
        task_service::delete_task(db, f.task_id).await?;
        work_service::delete_work(db, f.work_id).await?;
        vehicle_service::delete_vehicle(db, f.vehicle_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn invoice_item_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let f = fixture(&db).await?;

        let item = create_invoice_item(&db, 25.0, "5W30 oil", f.invoice_id, f.task_id).await?;
        assert_eq!(item.cost, 25.0);
        assert_eq!(item.description, "5W30 oil");
        assert_eq!(item.invoice_id, f.invoice_id);
        assert_eq!(item.task_id, f.task_id);

        let found = get_invoice_item(&db, item.item_id).await?.unwrap();
        assert_eq!(found, item);

        let updated = update_invoice_item(&db, item.item_id, 30.0, "5W40 oil", f.invoice_id, f.task_id).await?;
        assert_eq!(updated.cost, 30.0);
        assert_eq!(updated.description, "5W40 oil");

        assert!(delete_invoice_item(&db, item.item_id).await?);
        assert!(get_invoice_item(&db, item.item_id).await?.is_none());

        teardown(&db, &f).await?;
        Ok(())
    }

    #[tokio::test]
    async fn invoice_item_update_missing_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = update_invoice_item(&db, i32::MAX, 1.0, "x", 1, 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
