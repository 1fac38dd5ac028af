use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use models::setting;

/// List every setting in storage order.
pub async fn list_settings(db: &DatabaseConnection) -> Result<Vec<setting::Model>, ServiceError> {
    setting::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get setting by id.
pub async fn get_setting(db: &DatabaseConnection, id: i32) -> Result<Option<setting::Model>, ServiceError> {
    setting::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a setting. `key_name` is unique; a duplicate insert fails at the
/// database and the transaction is rolled back, leaving the existing row
/// untouched.
pub async fn create_setting(
    db: &DatabaseConnection,
    key_name: &str,
    value: &str,
) -> Result<setting::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = setting::ActiveModel {
        key_name: Set(key_name.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(Utc::now().into()),
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

/// Replace key and value of a setting, refreshing `updated_at`.
pub async fn update_setting(
    db: &DatabaseConnection,
    id: i32,
    key_name: &str,
    value: &str,
) -> Result<setting::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match setting::Entity::find_by_id(id).one(&txn).await {
        Ok(s) => s,
        Err(e) => {
            let _ = txn.rollback().await;
            return Err(ServiceError::Db(e.to_string()));
        }
    };
    let Some(found) = found else {
        let _ = txn.rollback().await;
        return Err(ServiceError::not_found("setting"));
    };
    let mut am: setting::ActiveModel = found.into();
    am.key_name = Set(key_name.to_string());
    am.value = Set(value.to_string());
    am.updated_at = Set(Utc::now().into());
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

/// Hard delete a setting. Returns false when the id does not exist.
pub async fn delete_setting(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = match setting::Entity::find_by_id(id).one(&txn).await {
        Ok(s) => s,
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
    use uuid::Uuid;

    #[tokio::test]
    async fn setting_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let key = format!("svc_setting_{}", Uuid::new_v4());
        let s = create_setting(&db, &key, "enabled").await?;
        assert_eq!(s.key_name, key);
        assert_eq!(s.value, "enabled");

        let found = get_setting(&db, s.setting_id).await?.unwrap();
        assert_eq!(found, s);

        let updated = update_setting(&db, s.setting_id, &key, "disabled").await?;
        assert_eq!(updated.value, "disabled");
        assert!(updated.updated_at >= s.updated_at);

        assert!(delete_setting(&db, s.setting_id).await?);
        assert!(get_setting(&db, s.setting_id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn setting_duplicate_key_rolls_back() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let key = format!("svc_dup_{}", Uuid::new_v4());
        let original = create_setting(&db, &key, "first").await?;

        let err = create_setting(&db, &key, "second").await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));

        // the existing row is untouched
        let untouched = get_setting(&db, original.setting_id).await?.unwrap();
        assert_eq!(untouched.value, "first");

        delete_setting(&db, original.setting_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn setting_update_missing_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = update_setting(&db, i32::MAX, "missing", "x").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
