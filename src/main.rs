//! Contact Assistant - Main entry point
//!
//! Starts the interactive assistant: loads configuration, initializes
//! logging to stderr, and hands stdin/stdout to the command loop.

use anyhow::Result;
use contact_assistant::{repl, AddressBook, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so the configured level can serve
    // as the filter fallback
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the transcript)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!(
        "Upcoming birthday window: {} days",
        config.upcoming_window_days
    );

    let mut book = AddressBook::new();
    repl::run(&mut book, &config)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
