//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use orders_core::order_status::OrderStatus;
use orders_db::fetch::FetchMode;
use orders_db::models::customer::{CreateCustomer, Customer};
use orders_db::models::order::{CreateOrder, Order};
use orders_db::models::order_item::CreateOrderItem;
use orders_db::repositories::{CustomerRepo, OrderItemRepo, OrderRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

use orders_api::config::ServerConfig;
use orders_api::router::build_app_router;
use orders_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        report_fetch_strategy: FetchMode::Optimized,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request through the router without a TCP listener.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

pub async fn seed_customer(pool: &PgPool, name: &str) -> Customer {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            company: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_order(pool: &PgPool, customer_id: i64, status: OrderStatus) -> Order {
    OrderRepo::create(
        pool,
        &CreateOrder {
            customer_id,
            status,
            notes: None,
            order_date: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_item(pool: &PgPool, order_id: i64, quantity: i32, price: &str) {
    OrderItemRepo::create(
        pool,
        &CreateOrderItem {
            order_id,
            product_name: "Widget".to_string(),
            quantity,
            unit_price: Decimal::from_str(price).unwrap(),
        },
    )
    .await
    .unwrap();
}

/// 3 customers, 5 orders (A: 2, B: 2, C: 1), items (2 x 10.00) and (1 x 5.50)
/// on every order. Returns the customers in creation order.
pub async fn seed_scenario(pool: &PgPool) -> Vec<Customer> {
    let a = seed_customer(pool, "Alice").await;
    let b = seed_customer(pool, "Bob").await;
    let c = seed_customer(pool, "Carol").await;

    for customer_id in [a.id, a.id, b.id, b.id, c.id] {
        let order = seed_order(pool, customer_id, OrderStatus::Shipped).await;
        seed_item(pool, order.id, 2, "10.00").await;
        seed_item(pool, order.id, 1, "5.50").await;
    }

    vec![a, b, c]
}
