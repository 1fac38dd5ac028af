use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Vehicle: index on client_id
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_client")
                    .table(Vehicle::Table)
                    .col(Vehicle::ClientId)
                    .to_owned(),
            )
            .await?;

        // Work: index on vehicle_id
        manager
            .create_index(
                Index::create()
                    .name("idx_work_vehicle")
                    .table(Work::Table)
                    .col(Work::VehicleId)
                    .to_owned(),
            )
            .await?;

        // Task: indexes on work_id and employee_id
        manager
            .create_index(
                Index::create()
                    .name("idx_task_work")
                    .table(Task::Table)
                    .col(Task::WorkId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_task_employee")
                    .table(Task::Table)
                    .col(Task::EmployeeId)
                    .to_owned(),
            )
            .await?;

        // Invoice: index on client_id
        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_client")
                    .table(Invoice::Table)
                    .col(Invoice::ClientId)
                    .to_owned(),
            )
            .await?;

        // InvoiceItem: indexes on invoice_id and task_id
        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_item_invoice")
                    .table(InvoiceItem::Table)
                    .col(InvoiceItem::InvoiceId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_item_task")
                    .table(InvoiceItem::Table)
                    .col(InvoiceItem::TaskId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_vehicle_client").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_work_vehicle").table(Work::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_task_work").table(Task::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_task_employee").table(Task::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_invoice_client").table(Invoice::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_invoice_item_invoice").table(InvoiceItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_invoice_item_task").table(InvoiceItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, ClientId }

#[derive(DeriveIden)]
enum Work { Table, VehicleId }

#[derive(DeriveIden)]
enum Task { Table, WorkId, EmployeeId }

#[derive(DeriveIden)]
enum Invoice { Table, ClientId }

#[derive(DeriveIden)]
enum InvoiceItem { Table, InvoiceId, TaskId }
