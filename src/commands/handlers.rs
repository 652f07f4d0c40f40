//! Command handlers.
//!
//! Each handler performs one operation against the address book and
//! returns the reply text printed to the user. Failures come back as
//! [`CommandError`]; the caller converts them to messages, so no user
//! input can terminate the process.

use super::Command;
use crate::book::AddressBook;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;

/// Execute a parsed command against the book.
///
/// `today` and `window_days` parameterize the upcoming-birthdays query so
/// callers (and tests) control the clock.
pub fn dispatch(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: i64,
) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book),
        Command::ChangePhone => change_phone(args, book),
        Command::ShowPhone => show_phone(args, book),
        Command::ShowAll => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(book, today, window_days)),
        Command::Delete => delete_contact(args, book),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// `add <name> <phone>`: create the record on first reference, then append
/// the phone. Both fields are validated before the book is touched.
fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments {
            usage: "add <name> <phone>",
        });
    };

    let name = ContactName::new(*name)?;

    if let Some(record) = book.find_mut(name.as_str()) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one phone number in place.
fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new, ..] = args else {
        return Err(CommandError::MissingArguments {
            usage: "change <name> <old phone> <new phone>",
        });
    };

    let record = find_record_mut(book, name)?;
    record.edit_phone(old, new)?;
    Ok("Phone number changed.".to_string())
}

/// `phone <name>`: list the contact's phone numbers.
fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments {
            usage: "phone <name>",
        });
    };

    let record = find_record(book, name)?;
    Ok(format!("{}: {}", record.name, record.phones_display()))
}

/// `all`: one line per record, in insertion order.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts in the address book.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace the birthday.
fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::MissingArguments {
            usage: "add-birthday <name> <DD.MM.YYYY>",
        });
    };

    let record = find_record_mut(book, name)?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: show the stored birthday, if any.
fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments {
            usage: "show-birthday <name>",
        });
    };

    let record = find_record(book, name)?;
    match &record.birthday {
        Some(birthday) => Ok(format!("{}'s birthday is {}", record.name, birthday)),
        None => Ok("No birthday found.".to_string()),
    }
}

/// `birthdays`: contacts to congratulate within the upcoming window.
fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|greeting| format!("{}: {}", greeting.name, greeting.greeting_date))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete <name>`: remove the record entirely.
fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments {
            usage: "delete <name>",
        });
    };

    book.remove(name)
        .map(|_| "Contact deleted.".to_string())
        .ok_or_else(|| CommandError::ContactNotFound {
            name: name.to_string(),
        })
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name).ok_or_else(|| CommandError::ContactNotFound {
        name: name.to_string(),
    })
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound {
            name: name.to_string(),
        })
}
