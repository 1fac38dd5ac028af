//! Create `invoice` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::InvoiceId))
                    .col(integer(Invoice::ClientId).not_null())
                    .col(timestamp_with_time_zone(Invoice::IssuedAt).not_null())
                    .col(double(Invoice::Iva).not_null())
                    .col(double(Invoice::Total).not_null())
                    .col(double(Invoice::TotalWithIva).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invoice::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Invoice { Table, InvoiceId, ClientId, IssuedAt, Iva, Total, TotalWithIva }
