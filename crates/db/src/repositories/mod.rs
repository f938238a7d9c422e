//! Repository layer: one unit struct per table.
//!
//! Methods take `&PgPool` and return `sqlx::Error` unchanged. Round-trip
//! counting happens at the call site (see [`crate::fetch`]), not here.

pub mod customer_repo;
pub mod order_item_repo;
pub mod order_repo;

pub use customer_repo::CustomerRepo;
pub use order_item_repo::OrderItemRepo;
pub use order_repo::OrderRepo;
