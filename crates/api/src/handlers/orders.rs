//! Handler for the orders report.
//!
//! Each request gets its own [`QueryCounter`]; the chosen fetch strategy
//! records every round trip on it and the count is returned in the response
//! metadata alongside wall-clock time.

use std::time::{Duration, Instant};

use axum::extract::{Query, State};
use axum::Json;
use orders_core::query_counter::QueryCounter;
use orders_core::report::OrderReportRow;
use orders_db::fetch::FetchMode;
use orders_db::report::assemble_report;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query params for `GET /orders/report`.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// `naive` or `optimized`. Defaults to the configured strategy.
    pub strategy: Option<String>,
}

/// Cost of producing the report.
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub total_orders: usize,
    pub query_count: usize,
    pub execution_time_ms: f64,
}

/// Body of `GET /orders/report`.
#[derive(Debug, Serialize)]
pub struct OrdersReportResponse {
    pub report: Vec<OrderReportRow>,
    pub metadata: ReportMetadata,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /orders/report
///
/// Fetches every order with its customer and items using the selected
/// strategy, then flattens them into report rows.
pub async fn orders_report(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> AppResult<Json<OrdersReportResponse>> {
    let mode = resolve_mode(params.strategy.as_deref(), state.config.report_fetch_strategy)?;
    let strategy = mode.strategy();

    let counter = QueryCounter::new();
    let start = Instant::now();

    let orders = strategy.fetch_orders(&state.pool, &counter).await?;
    let report = assemble_report(&orders);

    let execution_time_ms = elapsed_ms(start.elapsed());
    let query_count = counter.count();

    tracing::info!(
        strategy = strategy.name(),
        total_orders = report.len(),
        query_count,
        execution_time_ms,
        "Orders report assembled",
    );

    Ok(Json(OrdersReportResponse {
        metadata: ReportMetadata {
            total_orders: report.len(),
            query_count,
            execution_time_ms,
        },
        report,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pick the fetch mode from the query string, falling back to `default`.
fn resolve_mode(requested: Option<&str>, default: FetchMode) -> AppResult<FetchMode> {
    match requested {
        None => Ok(default),
        Some(raw) => FetchMode::from_str(raw).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown fetch strategy '{raw}'; expected 'naive' or 'optimized'"
            ))
        }),
    }
}

/// Milliseconds rounded to two decimals.
fn elapsed_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}
