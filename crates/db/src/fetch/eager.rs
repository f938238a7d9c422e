use std::collections::HashMap;

use async_trait::async_trait;
use orders_core::query_counter::QueryCounter;
use orders_core::types::DbId;
use sqlx::PgPool;

use super::{track, FetchStrategy, LoadedOrder};
use crate::models::order_item::OrderItem;
use crate::repositories::{OrderItemRepo, OrderRepo};

/// Eager, batched loading in exactly two round trips.
///
/// 1. Orders joined with their customer.
/// 2. All items whose `order_id` is in the set from step 1, grouped in memory.
///
/// Step 2 runs even when step 1 returned nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EagerFetch;

#[async_trait]
impl FetchStrategy for EagerFetch {
    fn name(&self) -> &'static str {
        "eager"
    }

    async fn fetch_orders(
        &self,
        pool: &PgPool,
        counter: &QueryCounter,
    ) -> Result<Vec<LoadedOrder>, sqlx::Error> {
        let rows = track(
            counter,
            "orders_with_customers",
            OrderRepo::list_with_customers(pool),
        )
        .await?;

        let order_ids: Vec<DbId> = rows.iter().map(|row| row.id).collect();
        let items = track(
            counter,
            "items_by_order_ids",
            OrderItemRepo::list_by_order_ids(pool, &order_ids),
        )
        .await?;

        let mut items_by_order: HashMap<DbId, Vec<OrderItem>> = HashMap::new();
        for item in items {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let (order, customer) = row.into_parts();
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                LoadedOrder {
                    order,
                    customer,
                    items,
                }
            })
            .collect())
    }
}
