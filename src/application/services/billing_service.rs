//! Bill generation service.

use std::sync::Arc;

use chrono::Local;

use crate::domain::entities::Bill;
use crate::domain::repositories::{CustomerRepository, UsageRepository};
use crate::error::AppError;

/// Service that joins a reading with its customer and prices it.
pub struct BillingService<C: CustomerRepository, U: UsageRepository> {
    customers: Arc<C>,
    usage: Arc<U>,
}

impl<C: CustomerRepository, U: UsageRepository> BillingService<C, U> {
    /// Creates a new billing service.
    pub fn new(customers: Arc<C>, usage: Arc<U>) -> Self {
        Self { customers, usage }
    }

    /// Generates the bill for a meter and month.
    ///
    /// Returns `Ok(None)` when no reading exists for the pair — a normal
    /// outcome, not an error. A reading whose meter has no customer row
    /// still produces a bill with placeholder contact fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when either query fails; generation
    /// aborts for that invocation only.
    pub async fn generate(&self, meter_no: &str, month: &str) -> Result<Option<Bill>, AppError> {
        let Some(record) = self.usage.find_by_meter_and_month(meter_no, month).await? else {
            return Ok(None);
        };

        let customer = self.customers.find_by_meter_no(meter_no).await?;

        Ok(Some(Bill::compute(
            &record,
            customer.as_ref(),
            Local::now().date_naive(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Customer, UsageRecord};
    use crate::domain::repositories::{MockCustomerRepository, MockUsageRepository};
    use mockall::predicate::eq;
    use serde_json::json;

    fn reading(units: i32) -> UsageRecord {
        UsageRecord {
            meter_no: "M1".to_string(),
            month: "Jan".to_string(),
            units_consumed: units,
        }
    }

    fn customer() -> Customer {
        Customer {
            meter_no: "M1".to_string(),
            name: "Asha Rao".to_string(),
            address: "12 Canal Road".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn generate_prices_the_reading_and_joins_the_customer() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_find_by_meter_no()
            .with(eq("M1"))
            .returning(|_| Ok(Some(customer())));

        let mut usage = MockUsageRepository::new();
        usage
            .expect_find_by_meter_and_month()
            .with(eq("M1"), eq("Jan"))
            .returning(|_, _| Ok(Some(reading(150))));

        let service = BillingService::new(Arc::new(customers), Arc::new(usage));
        let bill = service.generate("M1", "Jan").await.unwrap().unwrap();

        assert_eq!(bill.base_amount, 850.0);
        assert_eq!(bill.tax, 42.5);
        assert_eq!(bill.total, 942.5);
        assert_eq!(bill.name, "Asha Rao");
    }

    #[tokio::test]
    async fn generate_returns_none_when_no_reading_exists() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_find_by_meter_no().times(0);

        let mut usage = MockUsageRepository::new();
        usage
            .expect_find_by_meter_and_month()
            .returning(|_, _| Ok(None));

        let service = BillingService::new(Arc::new(customers), Arc::new(usage));

        assert!(service.generate("M1", "Feb").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn generate_tolerates_a_missing_customer() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_find_by_meter_no().returning(|_| Ok(None));

        let mut usage = MockUsageRepository::new();
        usage
            .expect_find_by_meter_and_month()
            .returning(|_, _| Ok(Some(reading(150))));

        let service = BillingService::new(Arc::new(customers), Arc::new(usage));
        let bill = service.generate("M1", "Jan").await.unwrap().unwrap();

        assert_eq!(bill.name, "N/A");
        assert_eq!(bill.address, "N/A");
        assert_eq!(bill.email, "N/A");
        assert_eq!(bill.total, 942.5);
    }

    #[tokio::test]
    async fn generate_propagates_query_failures() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_find_by_meter_no().times(0);

        let mut usage = MockUsageRepository::new();
        usage
            .expect_find_by_meter_and_month()
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let service = BillingService::new(Arc::new(customers), Arc::new(usage));
        let err = service.generate("M1", "Jan").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
