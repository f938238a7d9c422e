//! Order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use orders_core::order_status::OrderStatus;
use orders_core::types::{DbId, Timestamp};

use crate::models::customer::Customer;

/// An order row from the `orders` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_id: DbId,
    pub order_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub notes: Option<String>,
}

/// An order joined with its customer in a single row.
///
/// Customer columns are aliased with a `customer_` prefix so both sides of
/// the join decode from one result set.
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithCustomerRow {
    pub id: DbId,
    pub customer_id: DbId,
    pub order_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_company: Option<String>,
    pub customer_created_at: Timestamp,
}

impl OrderWithCustomerRow {
    /// Split the joined row back into its two entities.
    pub fn into_parts(self) -> (Order, Customer) {
        let customer = Customer {
            id: self.customer_id,
            name: self.customer_name,
            email: self.customer_email,
            company: self.customer_company,
            created_at: self.customer_created_at,
        };
        let order = Order {
            id: self.id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            status: self.status,
            notes: self.notes,
        };
        (order, customer)
    }
}

/// DTO for creating a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub customer_id: DbId,
    pub status: OrderStatus,
    pub notes: Option<String>,
    /// Defaults to `NOW()` if omitted.
    pub order_date: Option<Timestamp>,
}
