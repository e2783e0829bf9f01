//! Reading recording service.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::domain::entities::{NewUsageRecord, UsageRecord};
use crate::domain::repositories::UsageRepository;
use crate::error::AppError;

/// Service for recording monthly readings.
pub struct UsageService<U: UsageRepository> {
    usage: Arc<U>,
}

impl<U: UsageRepository> UsageService<U> {
    /// Creates a new usage service.
    pub fn new(usage: Arc<U>) -> Self {
        Self { usage }
    }

    /// Records a reading for a meter and month.
    ///
    /// Negative consumption is rejected here; the tariff itself stays a
    /// total function.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] for a duplicate `(meter_no, month)`
    /// pair and [`AppError::Validation`] when the meter is unknown (the
    /// storage layer's foreign key) or the input fails validation.
    pub async fn record(&self, new_record: NewUsageRecord) -> Result<UsageRecord, AppError> {
        new_record.validate().map_err(|e| {
            AppError::bad_request("Invalid usage data", json!({ "errors": e.to_string() }))
        })?;

        self.usage.create(new_record).await
    }
}
