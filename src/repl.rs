//! Interactive command loop.
//!
//! Reads one command per line from the input, dispatches it, and prints
//! the reply. The loop is generic over its IO so integration tests can
//! drive it with in-memory buffers; the binary wires it to stdin/stdout.
//! Logging goes to stderr only, keeping stdout clean for the transcript.

use crate::book::AddressBook;
use crate::commands::{self, Command};
use crate::config::Config;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Banner printed once at startup.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before each command, without a trailing newline.
pub const PROMPT: &str = "Enter a command: ";

/// Run the command loop over stdin/stdout until an exit command or EOF.
pub fn run(book: &mut AddressBook, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(stdin.lock(), stdout.lock(), book, config)
}

/// Run the command loop over arbitrary IO.
///
/// Every command failure is converted to a message and printed; only IO
/// errors on the streams themselves abort the loop.
pub fn run_with_io<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    book: &mut AddressBook,
    config: &Config,
) -> Result<()> {
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like an exit command
            debug!("input closed, shutting down");
            writeln!(output, "Good bye!")?;
            break;
        }

        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            // Blank line: just prompt again
            continue;
        };
        let word = word.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                warn!(command = %unknown, "unknown command");
                writeln!(output, "Invalid command.")?;
                continue;
            }
        };

        debug!(?command, args = args.len(), "dispatching");
        let today = chrono::Local::now().date_naive();
        match commands::dispatch(command, &args, book, today, config.upcoming_window_days) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(err) => {
                warn!(error = ?err, "command rejected");
                writeln!(output, "{}", err)?;
            }
        }

        if command == Command::Exit {
            break;
        }
    }

    Ok(())
}
