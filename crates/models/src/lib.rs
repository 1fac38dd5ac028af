//! Entity definitions for the garage schema, one module per table.
pub mod db;
pub mod invoice;
pub mod invoice_item;
pub mod setting;
pub mod task;
pub mod vehicle;
pub mod work;

#[cfg(test)]
mod tests;
