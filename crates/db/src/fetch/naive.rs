use std::collections::HashMap;

use async_trait::async_trait;
use orders_core::query_counter::QueryCounter;
use orders_core::types::DbId;
use sqlx::PgPool;

use super::{track, FetchStrategy, LoadedOrder};
use crate::models::customer::Customer;
use crate::repositories::{CustomerRepo, OrderItemRepo, OrderRepo};

/// Lazy, per-row loading.
///
/// One query lists the orders. Each order then costs one items query, and
/// each distinct customer one lookup. Customers already seen in this call
/// are served from an identity map, so repeats cost nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveFetch;

#[async_trait]
impl FetchStrategy for NaiveFetch {
    fn name(&self) -> &'static str {
        "naive"
    }

    async fn fetch_orders(
        &self,
        pool: &PgPool,
        counter: &QueryCounter,
    ) -> Result<Vec<LoadedOrder>, sqlx::Error> {
        let orders = track(counter, "orders", OrderRepo::list(pool)).await?;

        let mut identity_map: HashMap<DbId, Customer> = HashMap::new();
        let mut loaded = Vec::with_capacity(orders.len());

        for order in orders {
            let customer = match identity_map.get(&order.customer_id) {
                Some(customer) => customer.clone(),
                None => {
                    let customer = track(
                        counter,
                        "customer_by_id",
                        CustomerRepo::find_by_id(pool, order.customer_id),
                    )
                    .await?
                    .ok_or_else(|| {
                        tracing::error!(
                            order_id = order.id,
                            customer_id = order.customer_id,
                            "Order references a missing customer",
                        );
                        sqlx::Error::RowNotFound
                    })?;
                    identity_map.insert(customer.id, customer.clone());
                    customer
                }
            };

            let items = track(
                counter,
                "items_by_order",
                OrderItemRepo::list_by_order(pool, order.id),
            )
            .await?;

            loaded.push(LoadedOrder {
                order,
                customer,
                items,
            });
        }

        Ok(loaded)
    }
}
