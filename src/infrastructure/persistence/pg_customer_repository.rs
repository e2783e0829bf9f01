//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

/// PostgreSQL repository for customer records.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository over a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let result =
            sqlx::query("INSERT INTO customers (meter_no, name, address, email) VALUES ($1, $2, $3, $4)")
                .bind(&new_customer.meter_no)
                .bind(&new_customer.name)
                .bind(&new_customer.address)
                .bind(&new_customer.email)
                .execute(self.pool.as_ref())
                .await;

        match result {
            Ok(_) => Ok(Customer {
                meter_no: new_customer.meter_no,
                name: new_customer.name,
                address: new_customer.address,
                email: new_customer.email,
            }),
            Err(e) if is_unique_violation_on(&e, "customers_pkey") => Err(AppError::conflict(
                "A customer with this meter number already exists",
                json!({ "meter_no": new_customer.meter_no }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_meter_no(&self, meter_no: &str) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, Customer>(
            "SELECT meter_no, name, address, email FROM customers WHERE meter_no = $1",
        )
        .bind(meter_no)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
