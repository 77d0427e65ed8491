//! Sigil CLI — did:key derivation, inspection, signing and verification.
//!
//! Subcommands: init, keygen, did-key, inspect, sign, verify.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::SigilConfig;

/// Sigil — DID key identity tooling.
#[derive(Parser, Debug)]
#[command(name = "sigil", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(long, global = true, default_value = "sigil.toml")]
    config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
    /// Generate a new private key and print its did:key.
    Keygen(commands::keygen::KeygenArgs),
    /// Derive the did:key for an existing private key.
    DidKey(commands::did_key::DidKeyArgs),
    /// Decode a did:key and show its curve and point.
    Inspect(commands::inspect::InspectArgs),
    /// Sign a message with the configured identity key.
    Sign(commands::sign::SignArgs),
    /// Verify a signature attributed to a DID.
    Verify(commands::verify::VerifyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SigilConfig::load(&cli.config)?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match &cli.command {
        Commands::Init(args) => commands::init::run(args, &cli.config),
        Commands::Keygen(args) => commands::keygen::run(args),
        Commands::DidKey(args) => commands::did_key::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Sign(args) => commands::sign::run(args, &config),
        Commands::Verify(args) => commands::verify::run(args, &config).await,
    }
}

fn init_tracing(config: &SigilConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
