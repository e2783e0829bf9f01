//! Interactive numeric menu loop.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use crate::cli::commands;
use crate::state::AppState;

/// Runs the menu until the user chooses to exit.
///
/// Invalid choices are reported and the menu is shown again; operation
/// errors never break the loop.
pub async fn run(state: &AppState) -> Result<()> {
    loop {
        print_menu();

        let choice: String = Input::new().with_prompt("Choose option").interact_text()?;

        match choice.trim() {
            "1" => commands::add_customer(state, None, None, None, None).await?,
            "2" => commands::record_usage(state, None, None, None).await?,
            "3" => commands::generate_bill(state, None, None).await?,
            "4" => {
                println!("👋 Exiting...");
                return Ok(());
            }
            _ => println!("{}", "⚠️  Invalid option. Please try again.".yellow()),
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "===== Electricity Bill Generator =====".bright_blue().bold());
    println!("1. Add Customer");
    println!("2. Record Usage");
    println!("3. Generate Bill");
    println!("4. Exit");
}
