//! Create `invoice_item` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceItem::ItemId))
                    .col(double(InvoiceItem::Cost).not_null())
                    .col(string_len(InvoiceItem::Description, 200).not_null())
                    .col(integer(InvoiceItem::InvoiceId).not_null())
                    .col(integer(InvoiceItem::TaskId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_item_invoice")
                            .from(InvoiceItem::Table, InvoiceItem::InvoiceId)
                            .to(Invoice::Table, Invoice::InvoiceId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_item_task")
                            .from(InvoiceItem::Table, InvoiceItem::TaskId)
                            .to(Task::Table, Task::TaskId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InvoiceItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InvoiceItem { Table, ItemId, Cost, Description, InvoiceId, TaskId }

#[derive(DeriveIden)]
enum Invoice { Table, InvoiceId }

#[derive(DeriveIden)]
enum Task { Table, TaskId }
