//! Fetch strategies for loading orders with their customer and items.
//!
//! Both strategies return the same data: every order paired with its
//! customer and its line items, ordered by ascending order ID. They differ
//! only in how many round trips they spend doing it:
//!
//! | Strategy       | Round trips            |
//! |----------------|------------------------|
//! | [`NaiveFetch`] | `1 + C_distinct + N`   |
//! | [`EagerFetch`] | `2`                    |
//!
//! Every round trip is recorded on the caller's [`QueryCounter`].

mod eager;
mod naive;

use std::future::Future;

use async_trait::async_trait;
use orders_core::query_counter::QueryCounter;
use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::models::order::Order;
use crate::models::order_item::OrderItem;

pub use eager::EagerFetch;
pub use naive::NaiveFetch;

/// An order with its customer and items already resident in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedOrder {
    pub order: Order,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
}

/// Loads every order together with its related rows.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch all orders with customer and items populated.
    ///
    /// Any failed round trip aborts the whole fetch; no partial results.
    async fn fetch_orders(
        &self,
        pool: &PgPool,
        counter: &QueryCounter,
    ) -> Result<Vec<LoadedOrder>, sqlx::Error>;
}

/// Which [`FetchStrategy`] a report request runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Per-row lookups: the N+1 pattern.
    Naive,
    /// One joined query plus one batched items query.
    Optimized,
}

impl FetchMode {
    /// Return the canonical mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Optimized => "optimized",
        }
    }

    /// Parse a mode name, case-insensitively. `lazy` and `eager` are
    /// accepted as aliases. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "lazy" => Some(Self::Naive),
            "optimized" | "eager" => Some(Self::Optimized),
            _ => None,
        }
    }

    /// The strategy implementing this mode.
    pub fn strategy(self) -> &'static dyn FetchStrategy {
        match self {
            Self::Naive => &NaiveFetch,
            Self::Optimized => &EagerFetch,
        }
    }
}

impl std::fmt::Display for FetchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record one round trip on `counter`, then run `query`.
async fn track<F, T>(counter: &QueryCounter, label: &'static str, query: F) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    counter.record(label);
    query.await
}
