//! Round-trip tests for the storage contract.
//!
//! Any sequence of phone and birthday mutations must survive a save/load
//! cycle with identical keys, names, phone order, and birthdays, through
//! both the in-memory double and the real file repository.

mod mocks;

use mocks::InMemoryRepository;
use rolodex::domain::ContactName;
use rolodex::models::{AddressBook, Record};
use rolodex::repositories::{AddressBookRepository, JsonFileRepository};

/// Build a book by applying a mixed sequence of mutations.
fn mutated_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new(ContactName::new("John").unwrap());
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    john.add_phone("1234567890").unwrap();
    john.edit_phone("1234567890", "0987654321").unwrap();
    john.remove_phone("5555555555");
    john.set_birthday("24.06.1985").unwrap();
    john.set_birthday("25.06.1985").unwrap(); // replaced
    book.add_record(john);

    let mut jane = Record::new(ContactName::new("Jane").unwrap());
    jane.add_phone("1112223334").unwrap();
    book.add_record(jane);

    // No phones, no birthday
    book.add_record(Record::new(ContactName::new("Empty").unwrap()));

    book
}

fn assert_equivalent(loaded: &AddressBook, original: &AddressBook) {
    assert_eq!(loaded.len(), original.len());
    for (restored, expected) in loaded.iter().zip(original.iter()) {
        assert_eq!(restored.name(), expected.name());
        assert_eq!(restored.phones(), expected.phones());
        assert_eq!(restored.birthday(), expected.birthday());
    }
}

#[test]
fn test_in_memory_repository_round_trip() {
    let repo = InMemoryRepository::new();
    assert!(!repo.has_state());

    let book = mutated_book();
    repo.save(&book).unwrap();
    assert!(repo.has_state());

    let loaded = repo.load().unwrap();
    assert_equivalent(&loaded, &book);
}

#[test]
fn test_in_memory_repository_load_or_create_default() {
    let repo = InMemoryRepository::new();
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn test_file_repository_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    let book = mutated_book();
    repo.save(&book).unwrap();

    let loaded = repo.load().unwrap();
    assert_equivalent(&loaded, &book);
}

#[test]
fn test_file_repository_survives_repeated_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");

    // Session 1: create and save
    {
        let repo = JsonFileRepository::new(&path);
        let mut book = repo.load().unwrap();
        let mut rec = Record::new(ContactName::new("John").unwrap());
        rec.add_phone("1234567890").unwrap();
        book.add_record(rec);
        repo.save(&book).unwrap();
    }

    // Session 2: mutate and save again
    {
        let repo = JsonFileRepository::new(&path);
        let mut book = repo.load().unwrap();
        assert_eq!(book.len(), 1);
        let rec = book.find_mut("John").unwrap();
        rec.set_birthday("24.06.1985").unwrap();
        repo.save(&book).unwrap();
    }

    // Session 3: everything is still there
    let repo = JsonFileRepository::new(&path);
    let book = repo.load().unwrap();
    let rec = book.find("John").unwrap();
    assert_eq!(rec.phones().len(), 1);
    assert_eq!(rec.birthday().unwrap().to_string(), "24.06.1985");
}
