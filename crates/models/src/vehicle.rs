use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::work;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub vehicle_id: i32,
    pub brand: String,
    /// References the client table owned by the customer-facing system.
    pub client_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub license_plate: String,
    pub model: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Work,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Work => Entity::has_many(work::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
