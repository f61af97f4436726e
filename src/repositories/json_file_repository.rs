//! JSON file storage for the address book.

use crate::error::StorageResult;
use crate::models::{AddressBook, BookSnapshot};
use crate::repositories::AddressBookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the address book as a pretty-printed JSON snapshot at a fixed path.
///
/// Saves go through a sibling `.tmp` file followed by a rename, so a crash
/// mid-save leaves the previous file intact rather than a truncated one.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: BookSnapshot = serde_json::from_str(&text)?;
        let book = snapshot.into_book()?;
        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let snapshot = BookSnapshot::from(book);
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "address book saved"
        );
        Ok(())
    }
}
