//! commerce-ups - quote UPS shipping rates from the terminal
//!
//! - `commerce-ups quote --shipment shipment.json` prints rates for enabled services
//! - `commerce-ups services` lists UPS service codes and which are enabled
//! - `commerce-ups password set|delete` manages the keyring password

mod cli;

use clap::Parser;
use cli::{exit_codes, Cli, Commands};
use commerce_ups::core::CredentialError;
use commerce_ups::logging;
use commerce_ups::settings::SettingsError;
use commerce_ups::ups::RateError;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create runtime: {}", e);
            return exit_codes::UNEXPECTED_FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Quote(args) => rt.block_on(cli::quote::run(args, cli.config.as_deref())),
        Commands::Services(args) => cli::services::run(args, cli.config.as_deref()),
        Commands::Password(args) => cli::password::run(args, cli.config.as_deref()),
    };

    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            categorize_error(&e)
        }
    }
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    if let Some(rate_error) = e.downcast_ref::<RateError>() {
        return match rate_error {
            RateError::RateFetchFailed(_) => exit_codes::RATE_FETCH_FAILED,
            RateError::Shipment(_) => exit_codes::PARSE_ERROR,
        };
    }

    if e.downcast_ref::<SettingsError>().is_some() || e.downcast_ref::<CredentialError>().is_some() {
        return exit_codes::CONFIG_ERROR;
    }

    if e.downcast_ref::<serde_json::Error>().is_some() {
        return exit_codes::PARSE_ERROR;
    }

    exit_codes::UNEXPECTED_FAILURE
}
