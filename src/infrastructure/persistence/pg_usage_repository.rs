//! PostgreSQL implementation of the usage repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUsageRecord, UsageRecord};
use crate::domain::repositories::UsageRepository;
use crate::error::AppError;
use crate::utils::db_error::{is_foreign_key_violation_on, is_unique_violation_on};

/// PostgreSQL repository for monthly readings.
///
/// `usage` is quoted in every statement; it is a keyword in some SQL
/// dialects.
pub struct PgUsageRepository {
    pool: Arc<PgPool>,
}

impl PgUsageRepository {
    /// Creates a new repository over a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageRepository for PgUsageRepository {
    async fn create(&self, new_record: NewUsageRecord) -> Result<UsageRecord, AppError> {
        let result =
            sqlx::query(r#"INSERT INTO "usage" (meter_no, month, units_consumed) VALUES ($1, $2, $3)"#)
                .bind(&new_record.meter_no)
                .bind(&new_record.month)
                .bind(new_record.units_consumed)
                .execute(self.pool.as_ref())
                .await;

        match result {
            Ok(_) => Ok(UsageRecord {
                meter_no: new_record.meter_no,
                month: new_record.month,
                units_consumed: new_record.units_consumed,
            }),
            Err(e) if is_unique_violation_on(&e, "usage_pkey") => Err(AppError::conflict(
                "A reading for this meter and month already exists",
                json!({ "meter_no": new_record.meter_no, "month": new_record.month }),
            )),
            Err(e) if is_foreign_key_violation_on(&e, "usage_meter_no_fkey") => {
                Err(AppError::bad_request(
                    "No customer is registered for this meter number",
                    json!({ "meter_no": new_record.meter_no }),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_meter_and_month(
        &self,
        meter_no: &str,
        month: &str,
    ) -> Result<Option<UsageRecord>, AppError> {
        let row = sqlx::query_as::<_, UsageRecord>(
            r#"SELECT meter_no, month, units_consumed FROM "usage" WHERE meter_no = $1 AND month = $2"#,
        )
        .bind(meter_no)
        .bind(month)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
