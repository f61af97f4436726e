use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage abstraction for the address book.
///
/// Persistence is wholesale: the entire book is written and read in one
/// piece. Implementations must guarantee round-trip fidelity (every name,
/// phone sequence, and birthday survives a save/load cycle) and must never
/// leave a half-written file observable to a subsequent load.
pub trait AddressBookRepository {
    /// Load the persisted book, or a fresh empty one when no prior state
    /// exists. Unreadable or corrupt state is an error, not an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the full book so a subsequent `load` reconstructs an
    /// equivalent state.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
