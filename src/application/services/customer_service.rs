//! Customer registration service.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Service for registering and looking up customers.
pub struct CustomerService<C: CustomerRepository> {
    customers: Arc<C>,
}

impl<C: CustomerRepository> CustomerService<C> {
    /// Creates a new customer service.
    pub fn new(customers: Arc<C>) -> Self {
        Self { customers }
    }

    /// Registers a new customer.
    ///
    /// Input is validated against the column widths before the insert, so
    /// oversized fields fail with [`AppError::Validation`] instead of a
    /// database error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the meter number is already
    /// registered.
    pub async fn register(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        new_customer.validate().map_err(|e| {
            AppError::bad_request("Invalid customer data", json!({ "errors": e.to_string() }))
        })?;

        self.customers.create(new_customer).await
    }

    /// Looks up a customer by meter number.
    pub async fn find(&self, meter_no: &str) -> Result<Option<Customer>, AppError> {
        self.customers.find_by_meter_no(meter_no).await
    }
}
