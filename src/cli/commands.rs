//! Prompt-driven command flows shared by the menu and the subcommands.
//!
//! Per-operation database errors are recoverable: they are reported on
//! stderr and the caller continues. Only terminal I/O failures propagate.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use crate::domain::entities::{NewCustomer, NewUsageRecord};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a customer, prompting for any missing field.
pub async fn add_customer(
    state: &AppState,
    meter_no: Option<String>,
    name: Option<String>,
    address: Option<String>,
    email: Option<String>,
) -> Result<()> {
    println!("{}", "👤 Add Customer".bright_blue().bold());

    let new_customer = NewCustomer {
        meter_no: prompt_or("Meter No", meter_no)?,
        name: prompt_or("Name", name)?,
        address: prompt_or("Address", address)?,
        email: prompt_or("Email", email)?,
    };

    match state.customer_service.register(new_customer).await {
        Ok(_) => println!("{}", "✅ Customer added successfully.".green()),
        Err(e) => report_error("Could not add customer", &e),
    }

    Ok(())
}

/// Records a reading, prompting for any missing field.
pub async fn record_usage(
    state: &AppState,
    meter_no: Option<String>,
    month: Option<String>,
    units: Option<i32>,
) -> Result<()> {
    println!("{}", "🔌 Record Usage".bright_blue().bold());

    let new_record = NewUsageRecord {
        meter_no: prompt_or("Meter No", meter_no)?,
        month: prompt_or("Month", month)?,
        units_consumed: prompt_or_units("Units", units)?,
    };

    match state.usage_service.record(new_record).await {
        Ok(_) => println!("{}", "✅ Usage recorded.".green()),
        Err(e) => report_error("Could not record usage", &e),
    }

    Ok(())
}

/// Generates and prints the bill for a meter and month.
///
/// A missing reading is a normal outcome, reported as a warning rather
/// than an error.
pub async fn generate_bill(
    state: &AppState,
    meter_no: Option<String>,
    month: Option<String>,
) -> Result<()> {
    println!("{}", "🧾 Generate Bill".bright_blue().bold());

    let meter_no = prompt_or("Meter No", meter_no)?;
    let month = prompt_or("Month", month)?;

    match state.billing_service.generate(&meter_no, &month).await {
        Ok(Some(bill)) => {
            println!();
            println!("{}", bill.receipt());
        }
        Ok(None) => println!(
            "{}",
            "⚠️  No usage record found for the given meter and month.".yellow()
        ),
        Err(e) => report_error("Could not generate bill", &e),
    }

    Ok(())
}

/// Uses the flag value when present, otherwise prompts interactively.
fn prompt_or(label: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(label).interact_text()?),
    }
}

/// Numeric variant of [`prompt_or`]; dialoguer re-prompts on parse failure.
fn prompt_or_units(label: &str, value: Option<i32>) -> Result<i32> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<i32>::new().with_prompt(label).interact_text()?),
    }
}

/// Reports a recoverable operation error on stderr.
fn report_error(operation: &str, e: &AppError) {
    tracing::debug!(code = e.code(), details = %e.details(), "operation failed");
    eprintln!("{} {operation}. {e}", "ERROR:".red().bold());
}
