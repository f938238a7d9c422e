//! Repository for the `orders` table.

use sqlx::PgPool;
use orders_core::types::DbId;

use crate::models::order::{CreateOrder, Order, OrderWithCustomerRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, order_date, status, notes";

/// Order columns plus the customer's columns, for `orders o JOIN customers c`.
const JOINED_COLUMNS: &str = "o.id, o.customer_id, o.order_date, o.status, o.notes, \
    c.name AS customer_name, c.email AS customer_email, \
    c.company AS customer_company, c.created_at AS customer_created_at";

/// Provides create, list and delete operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order, returning the created row.
    ///
    /// If `order_date` is `None` in the input, the database default (`NOW()`) applies.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (customer_id, status, notes, order_date)
             VALUES ($1, $2, $3, COALESCE($4, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.customer_id)
            .bind(input.status.as_str())
            .bind(&input.notes)
            .bind(input.order_date)
            .fetch_one(pool)
            .await
    }

    /// List every order by ascending ID, without related rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY id");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }

    /// List every order joined with its customer, by ascending order ID.
    ///
    /// One round trip covers both entities.
    pub async fn list_with_customers(
        pool: &PgPool,
    ) -> Result<Vec<OrderWithCustomerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM orders o
             JOIN customers c ON c.id = o.customer_id
             ORDER BY o.id"
        );
        sqlx::query_as::<_, OrderWithCustomerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete an order by ID. Its items cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
