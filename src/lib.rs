//! Rolodex - a command-line contact manager with birthday reminders.
//!
//! Contacts are kept in an in-memory address book during a session and
//! persisted wholesale to a JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact record, the address book, and the persistence snapshot
//! - **repositories**: the load/save contract and the JSON file storage
//! - **commands**: handlers that turn tokenized arguments into book operations
//! - **repl**: the line-oriented command loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, BookSnapshot, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
