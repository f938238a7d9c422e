//! Flattened report row, one per order.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::order_status::OrderStatus;
use crate::types::{DbId, Timestamp};

/// One line of the orders report.
///
/// `total` serializes as a JSON number with its scale intact (`25.50`).
/// `order_date` serializes as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReportRow {
    pub order_id: DbId,
    pub customer_name: String,
    pub item_count: usize,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
    pub order_date: Timestamp,
    pub status: OrderStatus,
}
