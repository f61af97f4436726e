//! Command handlers and dispatch.

pub mod handlers;

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::NaiveDate;

pub use handlers::{
    add_birthday, add_contact, change_phone, delete_contact, hello, remove_phone, show_all,
    show_birthday, show_phone, upcoming_birthdays,
};

/// Route one tokenized command to its handler.
///
/// `close` and `exit` are not routed here; the REPL intercepts them before
/// dispatch so the loop owns its own termination.
pub fn dispatch(
    command: &str,
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
    default_window_days: u32,
) -> CommandResult<String> {
    match command {
        "hello" => hello(args),
        "add" => add_contact(args, book),
        "change" => change_phone(args, book),
        "phone" => show_phone(args, book),
        "remove-phone" => remove_phone(args, book),
        "delete" => delete_contact(args, book),
        "add-birthday" => add_birthday(args, book),
        "show-birthday" => show_birthday(args, book, today),
        "birthdays" => upcoming_birthdays(args, book, today, default_window_days),
        "all" => show_all(args, book),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
