//! Versioned persistence snapshot of the address book.
//!
//! The storage layer never serializes `AddressBook` directly; it goes
//! through this explicit transfer representation so the on-disk shape is
//! versioned and testable without touching the storage medium. Field values
//! re-validate through the domain value objects on deserialization, so a
//! tampered or corrupt file cannot smuggle invalid data into the book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::StorageError;
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One persisted contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactEntry {
    pub name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

/// The whole persisted address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSnapshot {
    pub version: u32,
    pub contacts: Vec<ContactEntry>,
}

impl From<&AddressBook> for BookSnapshot {
    fn from(book: &AddressBook) -> Self {
        let contacts = book
            .iter()
            .map(|record| ContactEntry {
                name: record.name().clone(),
                phones: record.phones().to_vec(),
                birthday: record.birthday().copied(),
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            contacts,
        }
    }
}

impl BookSnapshot {
    /// Rebuild the in-memory address book.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::UnsupportedVersion` when the snapshot was
    /// written by an unknown format version.
    pub fn into_book(self) -> Result<AddressBook, StorageError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(self.version));
        }

        let mut book = AddressBook::new();
        for entry in self.contacts {
            book.add_record(Record::from_parts(entry.name, entry.phones, entry.birthday));
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut john = Record::new(ContactName::new("John").unwrap());
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.add_phone("1234567890").unwrap(); // duplicate survives
        john.set_birthday("24.06.1985").unwrap();
        book.add_record(john);

        let jane = Record::new(ContactName::new("Jane").unwrap());
        book.add_record(jane);

        book
    }

    #[test]
    fn test_snapshot_round_trip_preserves_everything() {
        let book = sample_book();
        let snapshot = BookSnapshot::from(&book);
        let restored = snapshot.into_book().unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let book = sample_book();
        let json = serde_json::to_string(&BookSnapshot::from(&book)).unwrap();
        let snapshot: BookSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.into_book().unwrap(), book);
    }

    #[test]
    fn test_snapshot_rejects_unknown_version() {
        let snapshot = BookSnapshot {
            version: 99,
            contacts: Vec::new(),
        };
        match snapshot.into_book() {
            Err(StorageError::UnsupportedVersion(version)) => assert_eq!(version, 99),
            other => panic!("expected UnsupportedVersion, got: {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_deserialization_revalidates_fields() {
        // Nine-digit phone must not survive a load
        let json = r#"{"version":1,"contacts":[{"name":"John","phones":["123456789"]}]}"#;
        let result: Result<BookSnapshot, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_snapshot_omits_empty_fields() {
        let mut book = AddressBook::new();
        book.add_record(Record::new(ContactName::new("Jane").unwrap()));
        let json = serde_json::to_string(&BookSnapshot::from(&book)).unwrap();
        assert_eq!(json, r#"{"version":1,"contacts":[{"name":"Jane"}]}"#);
    }
}
