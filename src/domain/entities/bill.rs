//! Derived bill computed from a reading and its customer.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Customer, UsageRecord};
use crate::domain::tariff;
use crate::utils::currency::rupees;

/// Shown on the receipt when no customer row matches the reading's meter.
pub const MISSING_CUSTOMER_PLACEHOLDER: &str = "N/A";

const RECEIPT_RULE: &str = "--------------------------------------";

/// A bill for one meter and month.
///
/// Bills are computed on demand from a [`UsageRecord`] and its associated
/// [`Customer`]; they are never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Bill {
    pub meter_no: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub month: String,
    pub units_consumed: i32,
    pub base_amount: f64,
    pub fixed_charge: f64,
    pub tax: f64,
    pub total: f64,
    pub issued_on: NaiveDate,
}

impl Bill {
    /// Computes a bill from a reading and the customer it belongs to.
    ///
    /// A missing customer is tolerated: contact fields fall back to
    /// [`MISSING_CUSTOMER_PLACEHOLDER`] and the bill is still produced.
    pub fn compute(record: &UsageRecord, customer: Option<&Customer>, issued_on: NaiveDate) -> Self {
        let base_amount = tariff::base_amount(record.units_consumed);
        let tax = base_amount * tariff::TAX_RATE;
        let total = base_amount + tariff::FIXED_CHARGE + tax;

        let (name, address, email) = match customer {
            Some(c) => (c.name.clone(), c.address.clone(), c.email.clone()),
            None => (
                MISSING_CUSTOMER_PLACEHOLDER.to_string(),
                MISSING_CUSTOMER_PLACEHOLDER.to_string(),
                MISSING_CUSTOMER_PLACEHOLDER.to_string(),
            ),
        };

        Self {
            meter_no: record.meter_no.clone(),
            name,
            address,
            email,
            month: record.month.clone(),
            units_consumed: record.units_consumed,
            base_amount,
            fixed_charge: tariff::FIXED_CHARGE,
            tax,
            total,
            issued_on,
        }
    }

    /// Renders the plain-text receipt.
    ///
    /// Labels are left-aligned in a 15-character field; monetary values are
    /// rounded to two decimals here and nowhere earlier.
    pub fn receipt(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "📄  Electricity Bill");
        let _ = writeln!(out, "{RECEIPT_RULE}");
        let _ = writeln!(out, "{:<15}: {}", "Date", self.issued_on.format("%d-%m-%Y"));
        let _ = writeln!(out, "{:<15}: {}", "Meter No", self.meter_no);
        let _ = writeln!(out, "{:<15}: {}", "Name", self.name);
        let _ = writeln!(out, "{:<15}: {}", "Address", self.address);
        let _ = writeln!(out, "{:<15}: {}", "Email", self.email);
        let _ = writeln!(out, "{:<15}: {}", "Month", self.month);
        let _ = writeln!(out, "{:<15}: {}", "Units Consumed", self.units_consumed);
        let _ = writeln!(out, "{RECEIPT_RULE}");
        let _ = writeln!(out, "{:<15}: {}", "Base Amount", rupees(self.base_amount));
        let _ = writeln!(out, "{:<15}: {}", "Fixed Charge", rupees(self.fixed_charge));
        let _ = writeln!(out, "{:<15}: {}", "Tax (5%)", rupees(self.tax));
        let _ = writeln!(out, "{RECEIPT_RULE}");
        let _ = writeln!(out, "{:<15}: {}", "Total Amount", rupees(self.total));
        let _ = write!(out, "{RECEIPT_RULE}");

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn bill_for_150_units_matches_the_tariff() {
        let bill = Bill::compute(&reading(150), Some(&customer()), issue_date());

        assert_eq!(bill.base_amount, 850.0);
        assert_eq!(bill.fixed_charge, 50.0);
        assert_eq!(bill.tax, 42.5);
        assert_eq!(bill.total, 942.5);
        assert_eq!(bill.name, "Asha Rao");
    }

    #[test]
    fn total_is_base_plus_fixed_charge_plus_tax() {
        for units in [0, 42, 100, 237, 300, 981] {
            let bill = Bill::compute(&reading(units), Some(&customer()), issue_date());
            assert_eq!(bill.total, bill.base_amount + 50.0 + bill.base_amount * 0.05);
        }
    }

    #[test]
    fn missing_customer_degrades_to_placeholders() {
        let bill = Bill::compute(&reading(150), None, issue_date());

        assert_eq!(bill.name, "N/A");
        assert_eq!(bill.address, "N/A");
        assert_eq!(bill.email, "N/A");
        assert_eq!(bill.total, 942.5);
    }

    #[test]
    fn receipt_formats_currency_to_two_decimals() {
        let receipt = Bill::compute(&reading(150), Some(&customer()), issue_date()).receipt();

        assert!(receipt.contains("Base Amount    : Rs. 850.00"));
        assert!(receipt.contains("Tax (5%)       : Rs. 42.50"));
        assert!(receipt.contains("Total Amount   : Rs. 942.50"));
    }

    #[test]
    fn receipt_labels_are_fifteen_characters_wide() {
        let receipt = Bill::compute(&reading(150), Some(&customer()), issue_date()).receipt();

        for line in receipt.lines().filter(|l| l.contains(": ")) {
            let label_width = line.find(':').unwrap();
            assert_eq!(label_width, 15, "misaligned line: {line}");
        }
    }

    #[test]
    fn receipt_carries_the_issue_date() {
        let receipt = Bill::compute(&reading(150), Some(&customer()), issue_date()).receipt();
        assert!(receipt.contains("Date           : 06-08-2026"));
    }
}
