//! Contact record model.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a unique name, its phone numbers, and an optional birthday.
///
/// Phone numbers keep the order in which they were added. All field edits
/// go through the validating constructors of the domain value objects, so
/// a `Record` can never hold a malformed phone or birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Display name, unique within the address book
    pub name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, if one has been recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are allowed; insertion order is preserved.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// The record is left unchanged if `new` fails validation or `old` is
    /// not present.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let new = PhoneNumber::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound {
                phone: old.to_string(),
            })?;
        *slot = new;
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Find a phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous value.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined for display, e.g. `1234567890; 0987654321`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => "No birthday set".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_display(),
            birthday
        )
    }
}
