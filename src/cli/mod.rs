//! Command-line interface

pub mod password;
pub mod quote;
pub mod services;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use commerce_ups::settings::UpsSettings;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const PARSE_ERROR: i32 = 3;
    pub const RATE_FETCH_FAILED: i32 = 4;
}

#[derive(Debug, Parser)]
#[command(name = "commerce-ups", version, about = "Quote UPS shipping rates")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "COMMERCE_UPS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Quote rates for a shipment
    Quote(quote::QuoteArgs),

    /// List UPS services
    Services(services::ServicesArgs),

    /// Store or remove the UPS password in the OS keyring
    Password(password::PasswordArgs),
}

/// Load settings from the given path or the default location
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<UpsSettings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => UpsSettings::default_path()?,
    };
    Ok(UpsSettings::load(&path)?)
}
