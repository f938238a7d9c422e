//! Pure domain types for the orders report service.
//!
//! Nothing in this crate touches the database or the network. The db crate
//! builds on these types to fetch and assemble reports; the api crate
//! serializes them.

pub mod error;
pub mod money;
pub mod order_status;
pub mod query_counter;
pub mod report;
pub mod types;
