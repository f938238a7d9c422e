//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use orders_core::types::{DbId, Timestamp};

/// A customer row from the `customers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}
