//! Repository for the `order_items` table.

use sqlx::PgPool;
use orders_core::types::DbId;

use crate::models::order_item::{CreateOrderItem, OrderItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, order_id, product_name, quantity, unit_price";

/// Provides create and list operations for order line items.
pub struct OrderItemRepo;

impl OrderItemRepo {
    /// Insert a new line item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOrderItem) -> Result<OrderItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_items (order_id, product_name, quantity, unit_price)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(input.order_id)
            .bind(&input.product_name)
            .bind(input.quantity)
            .bind(input.unit_price)
            .fetch_one(pool)
            .await
    }

    /// List the items of one order by ascending ID.
    pub async fn list_by_order(pool: &PgPool, order_id: DbId) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id");
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// List the items of every order in `order_ids`, by ascending ID.
    ///
    /// An empty slice still issues the query and returns no rows.
    pub async fn list_by_order_ids(
        pool: &PgPool,
        order_ids: &[DbId],
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM order_items WHERE order_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_ids)
            .fetch_all(pool)
            .await
    }
}
