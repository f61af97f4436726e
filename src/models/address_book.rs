//! The address book: an insertion-ordered store of contact records.

use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use indexmap::IndexMap;

/// Keyed collection of all records for one session.
///
/// Keys are always derived from the record's own name on insert, so the key
/// and the stored name can never diverge. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its own name.
    ///
    /// An existing record under the same name is replaced wholesale
    /// (last-write-wins, no merge of phones or birthday); the replaced
    /// record is returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable exact, case-sensitive lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`, if any.
    /// The order of the remaining records is preserved.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose birthday occurs within `[today, today + window_days]`,
    /// inclusive at both ends.
    ///
    /// The occurrence is this calendar year's month/day; an occurrence that
    /// already passed earlier this year is NOT rolled into next year. That
    /// is intentionally different from `Record::days_to_birthday`, which
    /// does roll over (see DESIGN.md). Results follow book insertion order,
    /// not date order; callers wanting date order must sort.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<&Record> {
        // A window reaching past the calendar's end covers every remaining date
        let end = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);
        self.records
            .values()
            .filter(|record| {
                record.birthday().is_some_and(|birthday| {
                    let occurrence = birthday.occurrence_in_year(today.year());
                    today <= occurrence && occurrence <= end
                })
            })
            .collect()
    }
}
