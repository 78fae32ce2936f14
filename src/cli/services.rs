//! `services` command

use std::path::Path;

use clap::Args;

use commerce_ups::ups::service::{packaging, SERVICES};

#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Also list packaging type codes
    #[arg(long)]
    pub packaging: bool,
}

pub fn run(args: ServicesArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let settings = match super::load_settings(config) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::debug!("No settings loaded: {:#}", e);
            None
        }
    };

    for (code, name) in SERVICES {
        let enabled = settings
            .as_ref()
            .is_some_and(|s| s.is_service_enabled(code));
        println!("[{}] {:<4} {}", if enabled { "x" } else { " " }, code, name);
    }

    if args.packaging {
        println!();
        for (code, name) in packaging::ALL {
            println!("{:<4} {}", code, name);
        }
    }

    Ok(())
}
