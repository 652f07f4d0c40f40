//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid date regex"));

/// Date format used for both parsing and display.
pub(crate) const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// This ensures that birthdays are validated at construction time: the
/// input must be in `DD.MM.YYYY` form and must name a real calendar date
/// (`29.02.2021` is rejected, `29.02.2020` is accepted).
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1985").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1985");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (two-digit day and month)
    /// - Must name a real calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the date is malformed or
    /// does not exist.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        if !DATE_RE.is_match(&date) {
            return Err(ValidationError::InvalidDate(date));
        }

        let parsed = NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date))?;

        Ok(Self(parsed))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Compute the next occurrence of this birthday on or after `today`.
    ///
    /// The occurrence keeps the stored month and day but takes the year
    /// from `today`, rolling to next year when the date has already
    /// passed. A Feb 29 birthday is observed on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    /// The occurrence of this birthday in the given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Feb 29 in a non-leap year, observed on Mar 1
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1985").unwrap();
        assert_eq!(birthday.date(), date(1985, 6, 15));
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("15-06-1985").is_err());
        assert!(Birthday::new("1985.06.15").is_err());
        assert!(Birthday::new("5.6.1985").is_err());
        assert!(Birthday::new("15.06.85").is_err());
        assert!(Birthday::new("not a date").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("32.01.2000").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("15.13.2000").is_err());
        assert!(Birthday::new("31.04.2000").is_err());
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(Birthday::new("29.02.2021").is_err());
        assert!(Birthday::new("29.02.2020").is_ok());
    }

    #[test]
    fn test_birthday_display_round_trip() {
        let birthday = Birthday::new("01.02.1990").unwrap();
        assert_eq!(birthday.to_string(), "01.02.1990");
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("15.06.1985").unwrap();
        let today = date(2024, 6, 10);
        assert_eq!(birthday.next_occurrence(today), date(2024, 6, 15));
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::new("10.06.1985").unwrap();
        let today = date(2024, 6, 10);
        assert_eq!(birthday.next_occurrence(today), today);
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let birthday = Birthday::new("01.06.1985").unwrap();
        let today = date(2024, 6, 10);
        assert_eq!(birthday.next_occurrence(today), date(2025, 6, 1));
    }

    #[test]
    fn test_next_occurrence_leap_birthday_in_common_year() {
        let birthday = Birthday::new("29.02.2020").unwrap();
        let today = date(2023, 2, 1);
        assert_eq!(birthday.next_occurrence(today), date(2023, 3, 1));
    }

    #[test]
    fn test_next_occurrence_leap_birthday_in_leap_year() {
        let birthday = Birthday::new("29.02.2020").unwrap();
        let today = date(2024, 2, 1);
        assert_eq!(birthday.next_occurrence(today), date(2024, 2, 29));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("15.06.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1985\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"29.02.2021\"");
        assert!(result.is_err());
    }
}
