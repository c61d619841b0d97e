//! Velomir CLI - terminal demo of the cart widget.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shop session (cart persists to the store file)
//! velomir shop
//!
//! # Use a specific store file
//! velomir --store /tmp/cart.json shop
//!
//! # Clear the persisted cart
//! velomir reset
//! ```
//!
//! # Commands
//!
//! - `shop` - Interactive shop session against the built-in catalog
//! - `reset` - Clear the persisted cart

#![cfg_attr(not(test), forbid(unsafe_code))]
// An interactive terminal tool talks on stdout.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "velomir")]
#[command(author, version, about = "Velomir cart widget demo")]
struct Cli {
    /// Path of the cart store file (the demo's stand-in for browser storage)
    #[arg(long, default_value = "velomir-cart.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shop session
    Shop,
    /// Clear the persisted cart
    Reset,
}

fn main() {
    // Initialize tracing; default to info for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "velomir_cart=info,velomir_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shop => commands::shop::run(&cli.store)?,
        Commands::Reset => commands::reset::run(&cli.store)?,
    }
    Ok(())
}
