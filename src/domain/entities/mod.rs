//! Core domain entities for the billing data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! uses separate `New*` structs carrying the `validator` constraints, so the
//! stored entities never hold unvalidated data.
//!
//! - [`Customer`] / [`NewCustomer`] - a metering point and its contact data
//! - [`UsageRecord`] / [`NewUsageRecord`] - one month of consumption
//! - [`Bill`] - derived from a reading and its customer, never persisted

pub mod bill;
pub mod customer;
pub mod usage_record;

pub use bill::{Bill, MISSING_CUSTOMER_PLACEHOLDER};
pub use customer::{Customer, NewCustomer};
pub use usage_record::{NewUsageRecord, UsageRecord};
