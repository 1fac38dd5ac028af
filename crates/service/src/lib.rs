//! Service layer providing CRUD operations on top of the entity models.
//! - One module per resource, each exposing list/get/create/update/delete.
//! - Mutations run inside an explicit transaction: commit on success,
//!   rollback on every error path.
//! - Dates and timestamps arrive as text and are coerced here.

pub mod errors;
pub mod invoice_item_service;
pub mod invoice_service;
pub mod setting_service;
pub mod task_service;
pub mod vehicle_service;
pub mod work_service;
#[cfg(test)]
pub mod test_support;
