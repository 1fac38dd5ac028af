use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::invoice_item;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub invoice_id: i32,
    /// References the client table owned by the customer-facing system.
    pub client_id: i32,
    pub issued_at: DateTimeWithTimeZone,
    pub iva: f64,
    pub total: f64,
    /// Stored as sent; not validated against `total` + `iva`.
    pub total_with_iva: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    InvoiceItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::InvoiceItem => Entity::has_many(invoice_item::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
