//! In-memory address book.
//!
//! The [`AddressBook`] keeps records in insertion order, keyed by contact
//! name, and answers the upcoming-birthdays query. There is no persistence;
//! the book lives exactly as long as the process.

use crate::domain::birthday::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::Serialize;

/// A single entry in the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayGreeting {
    /// Contact display name
    pub name: String,

    /// Greeting date in `DD.MM.YYYY` form, weekend occurrences already
    /// shifted to the following Monday
    pub greeting_date: String,
}

/// Insertion-ordered store of contact records, keyed by name.
///
/// One record per name: inserting a record under an existing name replaces
/// the old record.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.as_str().to_string(), record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete a record by name, returning it if it existed.
    ///
    /// Remaining records keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthdays fall within `window_days` of `today`.
    ///
    /// For each record with a birthday, the next occurrence on or after
    /// `today` is computed and kept when it is at most `window_days` away
    /// (both bounds inclusive). Occurrences landing on a weekend report a
    /// greeting date shifted to the following Monday; the shift never
    /// affects which records are selected. Results follow book iteration
    /// order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<BirthdayGreeting> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday else {
                continue;
            };

            let occurrence = birthday.next_occurrence(today);
            let days_until = (occurrence - today).num_days();
            if days_until <= window_days {
                upcoming.push(BirthdayGreeting {
                    name: record.name.as_str().to_string(),
                    greeting_date: greeting_date_for(occurrence).format(DATE_FORMAT).to_string(),
                });
            }
        }

        upcoming
    }
}

/// Shift a weekend occurrence to the following Monday.
fn greeting_date_for(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}
