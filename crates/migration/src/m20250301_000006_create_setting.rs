//! Create `setting` table.
//!
//! `key_name` is unique; duplicate inserts must be rejected by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setting::Table)
                    .if_not_exists()
                    .col(pk_auto(Setting::SettingId))
                    .col(string_len(Setting::KeyName, 80).unique_key().not_null())
                    .col(string_len(Setting::Value, 200).not_null())
                    .col(timestamp_with_time_zone(Setting::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Setting::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Setting { Table, SettingId, KeyName, Value, UpdatedAt }
