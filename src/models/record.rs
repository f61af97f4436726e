//! Contact record: one person's name, phones, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation; phones and birthday are mutable. Phones
/// keep insertion order and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub(crate) fn from_parts(
        name: ContactName,
        phones: Vec<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are not collapsed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` without touching the list.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone whose rendered value equals `phone` exactly.
    /// Silent no-op when nothing matches.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// The replacement is validated before the list is touched; an invalid
    /// `new` leaves the record unchanged. Editing a value that is not
    /// present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not a valid phone.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
        }
        Ok(())
    }

    /// First phone whose rendered value equals `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` without touching the record.
    pub fn set_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(text)?);
        Ok(())
    }

    /// Days from `today` to the next occurrence of the birthday, rolling
    /// into next year when this year's occurrence has already passed.
    /// `None` when no birthday is set; otherwise always in `0..366`.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        Some((birthday.next_occurrence(today) - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "(none)")?;
        } else {
            for (i, phone) in self.phones.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}", phone)?;
            }
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
