//! Contact Assistant - an interactive command-line address book.
//!
//! This library implements an in-memory contact book: validated names,
//! phone numbers, and birthdays, plus the upcoming-birthdays query that
//! shifts weekend greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: The contact record
//! - **book**: Insertion-ordered address book and the birthday query
//! - **commands**: Command words, handlers, and dispatch
//! - **repl**: The interactive line-oriented loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, BirthdayGreeting};
pub use commands::Command;
pub use config::Config;
pub use error::{CommandError, ConfigError};
pub use models::Record;
