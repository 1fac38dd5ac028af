use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{invoice_item, work};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub task_id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// References the employee table owned by the staffing system.
    pub employee_id: i32,
    pub start_date: Date,
    pub end_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub status: Option<String>,
    pub work_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Work,
    InvoiceItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Work => Entity::belongs_to(work::Entity)
                .from(Column::WorkId)
                .to(work::Column::WorkId)
                .into(),
            Relation::InvoiceItem => Entity::has_many(invoice_item::Entity).into(),
        }
    }
}

impl Related<work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Work.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
