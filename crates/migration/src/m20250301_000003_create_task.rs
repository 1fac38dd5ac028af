//! Create `task` table.
//!
//! `employee_id` references an employee table owned by another system; no
//! constraint is emitted for it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::TaskId))
                    .col(text(Task::Description).not_null())
                    .col(integer(Task::EmployeeId).not_null())
                    .col(date(Task::StartDate).not_null())
                    .col(date_null(Task::EndDate))
                    .col(text_null(Task::Status))
                    .col(integer(Task::WorkId).not_null())
                    .col(timestamp_with_time_zone(Task::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_work")
                            .from(Task::Table, Task::WorkId)
                            .to(Work::Table, Work::WorkId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Task::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Task { Table, TaskId, Description, EmployeeId, StartDate, EndDate, Status, WorkId, CreatedAt }

#[derive(DeriveIden)]
enum Work { Table, WorkId }
