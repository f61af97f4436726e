//! Rolodex - main entry point.
//!
//! Loads configuration and the persisted address book, runs the interactive
//! command loop on stdin/stdout, and saves the book on exit.

use anyhow::Result;
use rolodex::repositories::{AddressBookRepository, JsonFileRepository};
use rolodex::{repl, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr only; stdout belongs to the command loop
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.storage_path.display(), "starting rolodex");

    let repository = JsonFileRepository::new(&config.storage_path);
    let mut book = match repository.load() {
        Ok(book) => book,
        Err(e) => {
            error!("failed to load address book: {}", e);
            return Err(e.into());
        }
    };
    info!(contacts = book.len(), "address book loaded");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut book, &config, stdin.lock(), &mut stdout)?;

    repository.save(&book)?;
    info!(contacts = book.len(), "address book saved");
    Ok(())
}
