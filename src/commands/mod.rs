//! Command parsing and dispatch.
//!
//! A user line is a command word followed by whitespace-separated
//! arguments. [`Command`] names every recognized word; [`handlers`]
//! implements the operations and converts failures into user-facing
//! messages at the dispatch boundary.

pub mod handlers;

pub use handlers::dispatch;

use std::str::FromStr;

/// A recognized command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello` - greet the user
    Hello,
    /// `add <name> <phone>` - create a contact or append a phone
    Add,
    /// `change <name> <old> <new>` - replace a phone number
    ChangePhone,
    /// `phone <name>` - show a contact's phone numbers
    ShowPhone,
    /// `all` - list every contact
    ShowAll,
    /// `add-birthday <name> <DD.MM.YYYY>` - set a contact's birthday
    AddBirthday,
    /// `show-birthday <name>` - show a contact's birthday
    ShowBirthday,
    /// `birthdays` - list upcoming birthdays
    Birthdays,
    /// `delete <name>` (alias `remove`) - delete a contact
    Delete,
    /// `close` / `exit` - leave the assistant
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::ChangePhone),
            "phone" => Ok(Command::ShowPhone),
            "all" => Ok(Command::ShowAll),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" | "remove" => Ok(Command::Delete),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}
