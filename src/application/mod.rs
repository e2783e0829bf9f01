//! Application layer services implementing business logic.
//!
//! Services consume the domain's repository traits and provide the API the
//! CLI drives:
//!
//! - [`services::CustomerService`] - customer registration
//! - [`services::UsageService`] - reading recording
//! - [`services::BillingService`] - bill generation

pub mod services;
