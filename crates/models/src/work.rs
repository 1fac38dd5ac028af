use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{task, vehicle};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub work_id: i32,
    pub cost: f64,
    pub created_at: DateTimeWithTimeZone,
    pub description: String,
    pub end_date: Date,
    pub start_date: Date,
    pub status: Option<String>,
    pub vehicle_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Vehicle,
    Task,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Vehicle => Entity::belongs_to(vehicle::Entity)
                .from(Column::VehicleId)
                .to(vehicle::Column::VehicleId)
                .into(),
            Relation::Task => Entity::has_many(task::Entity).into(),
        }
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
