use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{invoice, task};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoice_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub item_id: i32,
    pub cost: f64,
    pub description: String,
    pub invoice_id: i32,
    pub task_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Invoice,
    Task,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Invoice => Entity::belongs_to(invoice::Entity)
                .from(Column::InvoiceId)
                .to(invoice::Column::InvoiceId)
                .into(),
            Relation::Task => Entity::belongs_to(task::Entity)
                .from(Column::TaskId)
                .to(task::Column::TaskId)
                .into(),
        }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl Related<task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
