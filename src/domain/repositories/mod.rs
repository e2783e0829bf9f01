//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`, and `mockall` generates
//! mocks for service unit tests.

pub mod customer_repository;
pub mod usage_repository;

pub use customer_repository::CustomerRepository;
pub use usage_repository::UsageRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use usage_repository::MockUsageRepository;
