//! Cardapio CLI - terminal storefront for the ordering core.
//!
//! # Usage
//!
//! ```bash
//! # Build a cart and send the order in one go
//! cardapio order add:Pizza=30 add:Pizza=30 add:Suco=5 --address "Rua A, 123"
//!
//! # Same, as JSON for another program to consume
//! cardapio order add:Suco=5 --address "Rua B" --json
//!
//! # Interactive session
//! cardapio shell
//!
//! # Is the store open?
//! cardapio hours
//! cardapio hours --hour 19
//! ```
//!
//! # Commands
//!
//! - `order` - Replay cart steps and check out
//! - `shell` - Line-oriented session over stdin
//! - `hours` - Open/closed badge

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary is the presentation layer; stdout is its output.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::order::Step;
use config::CliConfig;

const DEFAULT_LOG_FILTER: &str = "warn,cardapio_core=info,cardapio=info";

#[derive(Parser)]
#[command(name = "cardapio")]
#[command(author, version, about = "Cardapio terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a cart from steps and check out
    Order {
        /// Cart steps, applied in order: `add:NAME=PRICE` or `remove:NAME`
        #[arg(value_name = "STEP")]
        steps: Vec<Step>,

        /// Delivery address
        #[arg(short, long, default_value = "")]
        address: String,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive session on stdin
    Shell,
    /// Show whether the store is open
    Hours {
        /// Hour of day to check (default: local time)
        #[arg(long)]
        hour: Option<u32>,
    },
}

fn main() {
    // Logs go to stderr so stdout stays clean for orders and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Order {
            steps,
            address,
            json,
        } => commands::order::run(&steps, &address, json, &config)?,
        Commands::Shell => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            commands::shell::run(stdin, stdout, &config)?;
        }
        Commands::Hours { hour } => commands::hours::run(hour, &config)?,
    }
    Ok(())
}
