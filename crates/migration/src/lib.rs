//! Migrator registering table migrations in foreign-key dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_vehicle;
mod m20250301_000002_create_work;
mod m20250301_000003_create_task;
mod m20250301_000004_create_invoice;
mod m20250301_000005_create_invoice_item;
mod m20250301_000006_create_setting;
mod m20250301_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_vehicle::Migration),
            Box::new(m20250301_000002_create_work::Migration),
            Box::new(m20250301_000003_create_task::Migration),
            Box::new(m20250301_000004_create_invoice::Migration),
            Box::new(m20250301_000005_create_invoice_item::Migration),
            Box::new(m20250301_000006_create_setting::Migration),
            // Indexes should always be applied last
            Box::new(m20250301_000007_add_indexes::Migration),
        ]
    }
}
