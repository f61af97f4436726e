//! Command handlers.
//!
//! Each handler takes the tokenized argument slice and the address book and
//! returns `Result<String, CommandError>`. Handlers never print; the REPL
//! owns the one place where errors become user-facing text.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Check the positional-argument count and destructure the slice.
fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    args.try_into().map_err(|_| CommandError::Arity {
        command,
        expected: N,
        got: args.len(),
    })
}

/// `add <name> <phone>` — create the contact if needed, append the phone.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args("add", args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(ContactName::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = expect_args("change", args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone number changed.".to_string())
}

/// `phone <name>` — show the contact's phone numbers.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args("phone", args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Ok(format!("{} has no phone numbers.", record.name()));
    }

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(format!("{}: {}", record.name(), phones.join("; ")))
}

/// `remove-phone <name> <phone>` — drop every matching phone.
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args("remove-phone", args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.remove_phone(phone);
    Ok("Phone number removed.".to_string())
}

/// `delete <name>` — remove the whole record.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = expect_args("delete", args)?;

    book.remove(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    Ok("Contact deleted.".to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = expect_args("add-birthday", args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>` — birthday plus days to the next occurrence.
pub fn show_birthday(args: &[&str], book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let [name] = expect_args("show-birthday", args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    match (record.birthday(), record.days_to_birthday(today)) {
        (Some(birthday), Some(0)) => Ok(format!("{}: {} (today!)", record.name(), birthday)),
        (Some(birthday), Some(days)) => Ok(format!(
            "{}: {} (in {} days)",
            record.name(),
            birthday,
            days
        )),
        _ => Ok(format!("{} has no birthday set.", record.name())),
    }
}

/// `birthdays [window_days]` — contacts with a birthday in the window,
/// defaulting to the configured window.
pub fn upcoming_birthdays(
    args: &[&str],
    book: &AddressBook,
    today: NaiveDate,
    default_window_days: u32,
) -> CommandResult<String> {
    let window_days = match args {
        [] => default_window_days,
        [window] => window
            .parse::<u32>()
            .map_err(|_| CommandError::InvalidArgument(window.to_string()))?,
        _ => {
            return Err(CommandError::Arity {
                command: "birthdays",
                expected: 1,
                got: args.len(),
            })
        }
    };

    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect();
    Ok(lines.join("\n"))
}

/// `all` — every record, one per line, in insertion order.
pub fn show_all(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [] = expect_args::<0>("all", args)?;

    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    let lines: Vec<String> = book.iter().map(|record| record.to_string()).collect();
    Ok(lines.join("\n"))
}

/// `hello`
pub fn hello(args: &[&str]) -> CommandResult<String> {
    let [] = expect_args::<0>("hello", args)?;
    Ok("How can I help you?".to_string())
}
