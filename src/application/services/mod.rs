//! Business logic services for the application layer.

pub mod billing_service;
pub mod customer_service;
pub mod usage_service;

pub use billing_service::BillingService;
pub use customer_service::CustomerService;
pub use usage_service::UsageService;
