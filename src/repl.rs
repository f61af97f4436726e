//! Line-oriented command loop.
//!
//! Reads a line, splits it into whitespace tokens, dispatches the first
//! token as the command and the rest as positional arguments. This is the
//! single place where handler results and errors become user-facing text;
//! nothing below this layer prints.

use crate::commands;
use crate::config::Config;
use crate::models::AddressBook;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";
const PROMPT: &str = "Enter a command: ";

/// Run the loop until EOF or a `close`/`exit` command.
///
/// Input and output are injected so tests can drive the loop with buffers.
pub fn run<R, W>(
    book: &mut AddressBook,
    config: &Config,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        if matches!(command, "close" | "exit") {
            break;
        }

        debug!(command, args = ?args, "dispatching");
        let today = Local::now().date_naive();
        match commands::dispatch(command, &args, book, today, config.birthday_window_days) {
            Ok(message) => writeln!(output, "{}", message)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}
