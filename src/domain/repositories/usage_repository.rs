//! Repository trait for usage reading data access.

use crate::domain::entities::{NewUsageRecord, UsageRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for monthly meter readings.
///
/// Readings are keyed by `(meter_no, month)` and immutable once stored.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUsageRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Inserts a new reading.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a reading for the same meter and
    /// month already exists, and [`AppError::Validation`] if the meter
    /// number does not belong to a registered customer (the storage layer's
    /// foreign key, not an application-level check). Returns
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_record: NewUsageRecord) -> Result<UsageRecord, AppError>;

    /// Finds the reading for a meter and month.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UsageRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_meter_and_month(
        &self,
        meter_no: &str,
        month: &str,
    ) -> Result<Option<UsageRecord>, AppError>;
}
