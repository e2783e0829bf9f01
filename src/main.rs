use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use ebill::cli::{Cli, Commands, commands, menu};
use ebill::config::{self, Config};
use ebill::infrastructure::persistence::schema;
use ebill::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    // Fatal tier: an unreachable server or failed DDL ends the process
    // with a non-zero status before any operation runs.
    let pool = schema::provision(&config).await?;

    let state = AppState::new(Arc::new(pool));

    match cli.command {
        Some(Commands::AddCustomer {
            meter_no,
            name,
            address,
            email,
        }) => commands::add_customer(&state, meter_no, name, address, email).await?,
        Some(Commands::RecordUsage {
            meter_no,
            month,
            units,
        }) => commands::record_usage(&state, meter_no, month, units).await?,
        Some(Commands::GenerateBill { meter_no, month }) => {
            commands::generate_bill(&state, meter_no, month).await?;
        }
        None => menu::run(&state).await?,
    }

    Ok(())
}

/// Logs go to stderr so receipts stay clean on stdout.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
