//! Command-line interface: argument parsing, prompt flows, and the
//! interactive menu loop.
//!
//! Running without a subcommand enters the numeric menu. Each subcommand
//! accepts its inputs as flags and falls back to interactive prompts for
//! whatever was not provided.

pub mod commands;
pub mod menu;

use clap::{Parser, Subcommand};

/// Electricity billing CLI.
#[derive(Parser)]
#[command(name = "ebill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Launches the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot operations, mirroring the menu entries.
#[derive(Subcommand)]
pub enum Commands {
    /// Register a new customer
    AddCustomer {
        /// Meter number (unique customer identifier)
        #[arg(short, long)]
        meter_no: Option<String>,

        /// Customer name
        #[arg(short, long)]
        name: Option<String>,

        /// Postal address
        #[arg(short, long)]
        address: Option<String>,

        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Record a monthly meter reading
    RecordUsage {
        /// Meter number
        #[arg(short, long)]
        meter_no: Option<String>,

        /// Billing month (e.g. "Jan")
        #[arg(long)]
        month: Option<String>,

        /// Units consumed
        #[arg(short, long)]
        units: Option<i32>,
    },

    /// Generate the bill for a meter and month
    GenerateBill {
        /// Meter number
        #[arg(short, long)]
        meter_no: Option<String>,

        /// Billing month (e.g. "Jan")
        #[arg(long)]
        month: Option<String>,
    },
}
