//! Route trees.
//!
//! ```text
//! /health            service and database health
//! /orders/report     orders report (?strategy=naive|optimized)
//! ```

pub mod health;
pub mod orders;
