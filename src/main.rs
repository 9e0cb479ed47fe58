//! Address Book - Main entry point
//!
//! Loads the save file, runs the interactive menu on stdin/stdout and saves
//! the book on exit.

use address_book::{AddressBookRepository, Config, FileRepository, Shell};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only so menu output stays clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repo = FileRepository::new(&config.book_path);
    let book = repo.load()?.with_page_size(config.page_size);
    info!(
        "Starting address book with {} contacts from {}",
        book.len(),
        config.book_path.display()
    );

    let stdin = io::stdin();
    let mut shell =
        Shell::new(book, repo, stdin.lock(), io::stdout()).with_autosave(config.autosave);
    if let Err(e) = shell.run() {
        error!("Address book session failed: {}", e);
        return Err(e);
    }

    info!("Address book shutdown complete");
    Ok(())
}
