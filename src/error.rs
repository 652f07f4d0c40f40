//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every variant's `Display` output is the message shown to the user at the
//! command-dispatch boundary; none of these errors terminate the process.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed format validation
    #[error(transparent)]
    InvalidFormat(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound { name: String },

    /// The phone number to replace does not exist on the record
    #[error("Old phone not found.")]
    PhoneNotFound { phone: String },

    /// Too few arguments on the command line
    #[error("Invalid input. Please provide the correct arguments.")]
    MissingArguments { usage: &'static str },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
