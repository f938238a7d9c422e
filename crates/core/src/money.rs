//! Exact decimal arithmetic for order totals.

use rust_decimal::Decimal;

/// Number of fractional digits carried by every monetary value on the wire.
pub const MONEY_SCALE: u32 = 2;

/// Extended price of one line: `quantity * unit_price`.
pub fn line_total(quantity: i32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

/// Sum of `quantity * unit_price` over all lines, at exactly two decimals.
///
/// An empty iterator yields `0.00`, not `0`.
pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (i32, Decimal)>,
{
    let mut total: Decimal = lines
        .into_iter()
        .map(|(quantity, unit_price)| line_total(quantity, unit_price))
        .sum();
    total.rescale(MONEY_SCALE);
    total
}
