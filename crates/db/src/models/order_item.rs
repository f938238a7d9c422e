//! Order line item model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use orders_core::types::DbId;

/// A line item row from the `order_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// DTO for creating a new line item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderItem {
    pub order_id: DbId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}
