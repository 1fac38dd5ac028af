use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use models::task;

// A malformed task date surfaces as an internal failure, not a validation
// error; only works get the 400 treatment.
fn parse_task_date(field: &str, value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| ServiceError::Internal(format!("invalid {}: {}", field, e)))
}

/// List every task in storage order.
pub async fn list_tasks(db: &DatabaseConnection) -> Result<Vec<task::Model>, ServiceError> {
    task::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get task by id.
pub async fn get_task(db: &DatabaseConnection, id: i32) -> Result<Option<task::Model>, ServiceError> {
    task::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a task. `end_date` and `status` are optional.
pub async fn create_task(
    db: &DatabaseConnection,
    description: &str,
    employee_id: i32,
    start_date: &str,
    end_date: Option<&str>,
    status: Option<&str>,
    work_id: i32,
) -> Result<task::Model, ServiceError> {
    let start = parse_task_date("start_date", start_date)?;
    let end = end_date.map(|d| parse_task_date("end_date", d)).transpose()?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = task::ActiveModel {
        description: Set(description.to_string()),
        employee_id: Set(employee_id),
        start_date: Set(start),
        end_date: Set(end),
        status: Set(status.map(str::to_string)),
        work_id: Set(work_id),
        created_at: Set(Utc::now().into()),
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

/// Replace every mutable field of a task.
pub async fn update_task(
    db: &DatabaseConnection,
    id: i32,
    description: &str,
    employee_id: i32,
    start_date: &str,
    end_date: Option<&str>,
    status: Option<&str>,
    work_id: i32,
) -> Result<task::Model, ServiceError> {
    let start = parse_task_date("start_date", start_date)?;
    let end = end_date.map(|d| parse_task_date("end_date", d)).transpose()?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match task::Entity::find_by_id(id).one(&txn).await {
        Ok(t) => t,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Err(ServiceError::not_found("task"));
    };
    let mut am: task::ActiveModel = found.into();
    am.description = Set(description.to_string());
    am.employee_id = Set(employee_id);
    am.start_date = Set(start);
    am.end_date = Set(end);
    am.status = Set(status.map(str::to_string));
    am.work_id = Set(work_id);
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

/// Hard delete a task. Returns false when the id does not exist.
pub async fn delete_task(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match task::Entity::find_by_id(id).one(&txn).await {
        Ok(t) => t,
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
