//! Create `work` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Work::Table)
                    .if_not_exists()
                    .col(pk_auto(Work::WorkId))
                    .col(double(Work::Cost).not_null())
                    .col(timestamp_with_time_zone(Work::CreatedAt).not_null())
                    .col(string_len(Work::Description, 200).not_null())
                    .col(date(Work::EndDate).not_null())
                    .col(date(Work::StartDate).not_null())
                    .col(string_len_null(Work::Status, 50))
                    .col(integer(Work::VehicleId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_vehicle")
                            .from(Work::Table, Work::VehicleId)
                            .to(Vehicle::Table, Vehicle::VehicleId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Work::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Work { Table, WorkId, Cost, CreatedAt, Description, EndDate, StartDate, Status, VehicleId }

#[derive(DeriveIden)]
enum Vehicle { Table, VehicleId }
