//! docval - Application entry point
//!
//! CLI-based entry point that dispatches to the commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppConfig;
use docval::{cli::Cli, commands, output};

#[tokio::main]
async fn main() {
    // Load configuration first so `.env` also feeds clap's env fallbacks
    let mut config = AppConfig::from_env();

    // Parse CLI arguments
    let cli = Cli::parse();
    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let format = cli.format;
    if let Err(e) = commands::run(cli, config).await {
        tracing::debug!(code = e.code(), "Command failed: {}", e);
        eprintln!("{}", output::error(&e, format));
        std::process::exit(e.exit_code());
    }
}

/// Initialize tracing subscriber on stderr so stdout carries only results
fn init_tracing(verbose: bool, level: &str) {
    let filter = if verbose { "debug" } else { level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
