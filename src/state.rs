//! Shared application state wiring repositories into services.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{BillingService, CustomerService, UsageService};
use crate::infrastructure::persistence::{PgCustomerRepository, PgUsageRepository};

/// Handles to the application services, all backed by the same pool.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<PgCustomerRepository>>,
    pub usage_service: Arc<UsageService<PgUsageRepository>>,
    pub billing_service: Arc<BillingService<PgCustomerRepository, PgUsageRepository>>,
}

impl AppState {
    /// Builds the service graph over a connected pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let customer_repo = Arc::new(PgCustomerRepository::new(pool.clone()));
        let usage_repo = Arc::new(PgUsageRepository::new(pool.clone()));

        Self {
            customer_service: Arc::new(CustomerService::new(customer_repo.clone())),
            usage_service: Arc::new(UsageService::new(usage_repo.clone())),
            billing_service: Arc::new(BillingService::new(customer_repo, usage_repo)),
        }
    }
}
