//! Create `vehicle` table.
//!
//! Root entity of the garage schema; works reference it. `client_id` points
//! at a client table managed outside this repository, so it stays a plain
//! integer column without a constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::VehicleId))
                    .col(string_len(Vehicle::Brand, 80).not_null())
                    .col(integer(Vehicle::ClientId).not_null())
                    .col(timestamp_with_time_zone(Vehicle::CreatedAt).not_null())
                    .col(string_len(Vehicle::LicensePlate, 30).not_null())
                    .col(string_len(Vehicle::Model, 80).not_null())
                    .col(integer(Vehicle::Year).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, VehicleId, Brand, ClientId, CreatedAt, LicensePlate, Model, Year }
