#![allow(dead_code)]

use sqlx::PgPool;

use ebill::domain::entities::{NewCustomer, NewUsageRecord};
use ebill::infrastructure::persistence::schema;

/// Provisions the two tables into the test database.
pub async fn setup_schema(pool: &PgPool) {
    schema::create_tables(pool).await.unwrap();
}

pub async fn insert_customer(
    pool: &PgPool,
    meter_no: &str,
    name: &str,
    address: &str,
    email: &str,
) {
    sqlx::query("INSERT INTO customers (meter_no, name, address, email) VALUES ($1, $2, $3, $4)")
        .bind(meter_no)
        .bind(name)
        .bind(address)
        .bind(email)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_reading(pool: &PgPool, meter_no: &str, month: &str, units: i32) {
    sqlx::query(r#"INSERT INTO "usage" (meter_no, month, units_consumed) VALUES ($1, $2, $3)"#)
        .bind(meter_no)
        .bind(month)
        .bind(units)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn units_for(pool: &PgPool, meter_no: &str, month: &str) -> i32 {
    sqlx::query_scalar(
        r#"SELECT units_consumed FROM "usage" WHERE meter_no = $1 AND month = $2"#,
    )
    .bind(meter_no)
    .bind(month)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn new_customer(meter_no: &str) -> NewCustomer {
    NewCustomer {
        meter_no: meter_no.to_string(),
        name: "Asha Rao".to_string(),
        address: "12 Canal Road".to_string(),
        email: "asha@example.com".to_string(),
    }
}

pub fn new_reading(meter_no: &str, month: &str, units: i32) -> NewUsageRecord {
    NewUsageRecord {
        meter_no: meter_no.to_string(),
        month: month.to_string(),
        units_consumed: units,
    }
}
