//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and parse pattern for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday: a pure calendar date, no time-of-day, no timezone.
///
/// Parsed strictly from `DD.MM.YYYY` (two-digit day, two-digit month,
/// four-digit year, dot-separated, nothing trailing) and rendered back in
/// the same format.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("24.06.1985").unwrap();
/// assert_eq!(birthday.to_string(), "24.06.1985");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not match the
    /// pattern or names an impossible calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !Self::has_strict_shape(text) {
            return Err(ValidationError::InvalidDate(text.to_string()));
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(text.to_string()))
    }

    // chrono's %d/%m/%Y parsing accepts unpadded numbers, so the two-digit
    // day, two-digit month, four-digit year shape is checked up front.
    fn has_strict_shape(text: &str) -> bool {
        let bytes = text.as_bytes();
        bytes.len() == 10
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| match i {
                    2 | 5 => *b == b'.',
                    _ => b.is_ascii_digit(),
                })
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The occurrence of this birthday's month/day in the given year.
    ///
    /// Feb 29 birthdays fall back to Mar 1 when `year` is not a leap year.
    pub fn occurrence_in_year(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()) {
            Some(date) => date,
            None => NaiveDate::from_ymd_opt(year, 3, 1)
                .expect("Mar 1 exists in every year"),
        }
    }

    /// The next occurrence on or after `today`, rolling into next year when
    /// this year's occurrence has already passed.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in_year(today.year());
        if this_year < today {
            self.occurrence_in_year(today.year() + 1)
        } else {
            this_year
        }
    }
}

// Serde support - serialize in DD.MM.YYYY form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
