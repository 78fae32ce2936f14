//! `quote` command

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use commerce_ups::core::{KeyringCredentialStore, Shipment, ShippingRate};
use commerce_ups::ups::RateRequester;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Shipment JSON file
    #[arg(long)]
    pub shipment: PathBuf,

    /// Print rates as JSON
    #[arg(long)]
    pub json: bool,
}

/// Rates quoted for one shipment
#[derive(Debug, Serialize)]
struct RateQuote {
    quoted_at: DateTime<Utc>,
    integration_mode: bool,
    rates: Vec<ShippingRate>,
}

pub async fn run(args: QuoteArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let settings = super::load_settings(config)?;

    let content = std::fs::read_to_string(&args.shipment)
        .with_context(|| format!("Failed to read {}", args.shipment.display()))?;
    let shipment: Shipment = serde_json::from_str(&content)?;

    let requester = RateRequester::from_settings(settings, &KeyringCredentialStore::new())?;
    let rates = requester.fetch_rates(&shipment).await?;

    if args.json {
        let quote = RateQuote {
            quoted_at: Utc::now(),
            integration_mode: requester.use_integration_mode(),
            rates,
        };
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    if rates.is_empty() {
        println!("No enabled UPS service returned a rate.");
        return Ok(());
    }

    for rate in &rates {
        println!("{:<4} {:<32} {:>12}", rate.id, rate.service.label, rate.amount.to_string());
    }

    Ok(())
}
