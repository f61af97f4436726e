//! Data models for the address book.
//!
//! This module contains the contact record, the keyed address book that
//! owns all records, and the versioned snapshot used for persistence.

pub mod address_book;
pub mod record;
pub mod snapshot;

pub use address_book::AddressBook;
pub use record::Record;
pub use snapshot::{BookSnapshot, ContactEntry, SNAPSHOT_VERSION};
