//! Report assembly: folds loaded orders into flat report rows.
//!
//! Works only on data the fetch strategy already loaded. There is no pool in
//! scope here, so assembly cannot issue a round trip.

use orders_core::money::order_total;
use orders_core::report::OrderReportRow;

use crate::fetch::LoadedOrder;

/// Build one report row from a loaded order.
pub fn report_row(loaded: &LoadedOrder) -> OrderReportRow {
    OrderReportRow {
        order_id: loaded.order.id,
        customer_name: loaded.customer.name.clone(),
        item_count: loaded.items.len(),
        total: order_total(
            loaded
                .items
                .iter()
                .map(|item| (item.quantity, item.unit_price)),
        ),
        order_date: loaded.order.order_date,
        status: loaded.order.status,
    }
}

/// Build the full report, one row per order, in input order.
pub fn assemble_report(orders: &[LoadedOrder]) -> Vec<OrderReportRow> {
    orders.iter().map(report_row).collect()
}
