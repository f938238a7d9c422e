//! Integration tests for schema constraints and cascade deletes.

use std::str::FromStr;

use assert_matches::assert_matches;
use orders_core::order_status::OrderStatus;
use orders_core::query_counter::QueryCounter;
use orders_db::fetch::{EagerFetch, FetchStrategy};
use orders_db::models::customer::CreateCustomer;
use orders_db::models::order::CreateOrder;
use orders_db::models::order_item::CreateOrderItem;
use orders_db::repositories::{CustomerRepo, OrderItemRepo, OrderRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

fn new_customer(name: &str) -> CreateCustomer {
    CreateCustomer {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        company: Some("Initech".to_string()),
    }
}

fn new_order(customer_id: i64) -> CreateOrder {
    CreateOrder {
        customer_id,
        status: OrderStatus::Processing,
        notes: Some("leave at the door".to_string()),
        order_date: None,
    }
}

fn new_item(order_id: i64, quantity: i32, price: &str) -> CreateOrderItem {
    CreateOrderItem {
        order_id,
        product_name: "Stapler".to_string(),
        quantity,
        unit_price: Decimal::from_str(price).unwrap(),
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_customer_cascades_to_orders_and_items(pool: PgPool) {
    let keep = CustomerRepo::create(&pool, &new_customer("Keep")).await.unwrap();
    let gone = CustomerRepo::create(&pool, &new_customer("Gone")).await.unwrap();

    for customer_id in [keep.id, gone.id, gone.id] {
        let order = OrderRepo::create(&pool, &new_order(customer_id)).await.unwrap();
        OrderItemRepo::create(&pool, &new_item(order.id, 1, "2.00"))
            .await
            .unwrap();
    }

    assert!(CustomerRepo::delete(&pool, gone.id).await.unwrap());

    assert_eq!(count(&pool, "orders").await, 1);
    assert_eq!(count(&pool, "order_items").await, 1);

    let counter = QueryCounter::new();
    let orders = EagerFetch.fetch_orders(&pool, &counter).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer.id, keep.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_order_cascades_to_items(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &new_customer("Solo")).await.unwrap();
    let order = OrderRepo::create(&pool, &new_order(customer.id)).await.unwrap();
    OrderItemRepo::create(&pool, &new_item(order.id, 3, "1.25"))
        .await
        .unwrap();

    assert!(OrderRepo::delete(&pool, order.id).await.unwrap());
    assert!(!OrderRepo::delete(&pool, order.id).await.unwrap());
    assert_eq!(count(&pool, "order_items").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_quantity_violates_check(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &new_customer("Zero")).await.unwrap();
    let order = OrderRepo::create(&pool, &new_order(customer.id)).await.unwrap();

    let err = OrderItemRepo::create(&pool, &new_item(order.id, 0, "1.00"))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("ck_order_items_positive_quantity"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_price_violates_check(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &new_customer("Neg")).await.unwrap();
    let order = OrderRepo::create(&pool, &new_order(customer.id)).await.unwrap();

    let err = OrderItemRepo::create(&pool, &new_item(order.id, 1, "-0.01"))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("ck_order_items_non_negative_price"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_status_is_rejected_by_schema(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &new_customer("Odd")).await.unwrap();

    let err = sqlx::query("INSERT INTO orders (customer_id, status) VALUES ($1, 'refunded')")
        .bind(customer.id)
        .execute(&pool)
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("ck_orders_status"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn order_for_missing_customer_violates_foreign_key(pool: PgPool) {
    let err = OrderRepo::create(&pool, &new_order(999_999)).await.unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_unique(pool: PgPool) {
    CustomerRepo::create(&pool, &new_customer("Twin")).await.unwrap();

    let err = CustomerRepo::create(&pool, &new_customer("Twin")).await.unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("uq_customers_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_rows_round_trip_through_lookup(pool: PgPool) {
    let created = CustomerRepo::create(&pool, &new_customer("Lookup")).await.unwrap();

    let found = CustomerRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    let order = OrderRepo::create(&pool, &new_order(created.id)).await.unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.notes.as_deref(), Some("leave at the door"));

    let item = OrderItemRepo::create(&pool, &new_item(order.id, 4, "2.50"))
        .await
        .unwrap();
    assert_eq!(item.unit_price, Decimal::from_str("2.50").unwrap());

    assert_eq!(CustomerRepo::find_by_id(&pool, 999_999).await.unwrap(), None);
}
