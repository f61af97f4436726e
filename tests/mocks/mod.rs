//! In-memory test double for the storage contract.

use rolodex::error::StorageResult;
use rolodex::models::{AddressBook, BookSnapshot};
use rolodex::repositories::AddressBookRepository;
use std::cell::RefCell;

/// Repository that keeps the serialized snapshot in memory.
///
/// Serializing for real (instead of cloning the book) keeps the test double
/// honest about what actually crosses the storage boundary.
#[derive(Default)]
pub struct InMemoryRepository {
    stored: RefCell<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_state(&self) -> bool {
        self.stored.borrow().is_some()
    }
}

impl AddressBookRepository for InMemoryRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        match self.stored.borrow().as_deref() {
            None => Ok(AddressBook::new()),
            Some(json) => serde_json::from_str::<BookSnapshot>(json)?.into_book(),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string(&BookSnapshot::from(book))?;
        *self.stored.borrow_mut() = Some(json);
        Ok(())
    }
}
