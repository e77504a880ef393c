//! Overland Parts CLI - account tooling and catalogue export.
//!
//! # Usage
//!
//! ```bash
//! # Hash a password for a seeded account
//! op-cli accounts hash-password -p secret
//!
//! # Show the demo accounts
//! op-cli accounts list
//!
//! # Dump the parts catalogue as JSON
//! op-cli catalog export
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "op-cli")]
#[command(author, version, about = "Overland Parts CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account tooling
    Accounts {
        #[command(subcommand)]
        action: AccountsAction,
    },
    /// Catalogue tooling
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum AccountsAction {
    /// Hash a password with Argon2id and print the PHC string
    HashPassword {
        /// The password to hash
        #[arg(short, long)]
        password: String,
    },
    /// List the demo accounts both binaries seed at startup
    List,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Dump the vehicle list and parts catalogue as JSON on stdout
    Export {
        /// Single-line output for piping
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Accounts { action } => match action {
            AccountsAction::HashPassword { password } => {
                commands::accounts::hash_password(&password)?;
            }
            AccountsAction::List => commands::accounts::list(),
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Export { compact } => commands::catalog::export(compact)?,
        },
    }
    Ok(())
}
