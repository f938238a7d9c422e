use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted under `/orders`.
///
/// ```text
/// GET /report     orders report with round-trip metadata
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/report", get(orders::orders_report))
}
