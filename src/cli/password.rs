//! `password` command - manage the UPS password kept in the OS keyring

use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use clap::{Args, Subcommand};

use commerce_ups::core::{forget_password, store_password, KeyringCredentialStore};

#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// UPS user id; defaults to the one in the config file
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    #[command(subcommand)]
    pub action: PasswordAction,
}

#[derive(Debug, Subcommand)]
pub enum PasswordAction {
    /// Store the password read from the first line of stdin
    Set,

    /// Remove the stored password
    Delete,
}

pub fn run(args: PasswordArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let user_id = match args.user_id {
        Some(id) => id,
        None => super::load_settings(config)?.api_information.user_id,
    };
    let store = KeyringCredentialStore::new();

    match args.action {
        PasswordAction::Set => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            store_password(&store, &user_id, line.trim_end_matches(['\r', '\n']))?;
            println!("Stored UPS password for {}", user_id);
        }
        PasswordAction::Delete => {
            forget_password(&store, &user_id)?;
            println!("Deleted UPS password for {}", user_id);
        }
    }

    Ok(())
}
