//! Monthly meter reading entity.

use serde::Serialize;
use validator::Validate;

/// A recorded month of consumption for one meter.
///
/// `(meter_no, month)` is the composite key; a reading is immutable once
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UsageRecord {
    pub meter_no: String,
    pub month: String,
    pub units_consumed: i32,
}

/// Input data for recording a reading.
#[derive(Debug, Clone, Validate)]
pub struct NewUsageRecord {
    #[validate(length(min = 1, max = 20, message = "meter number must be 1-20 characters"))]
    pub meter_no: String,
    #[validate(length(min = 1, max = 20, message = "month must be 1-20 characters"))]
    pub month: String,
    #[validate(range(min = 0, message = "units consumed cannot be negative"))]
    pub units_consumed: i32,
}
