//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for customer records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Inserts a new customer row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a customer with the same meter
    /// number already exists. Returns [`AppError::Internal`] on other
    /// database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Finds a customer by meter number.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Customer))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_meter_no(&self, meter_no: &str) -> Result<Option<Customer>, AppError>;
}
