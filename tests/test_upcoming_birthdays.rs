//! Integration tests for the upcoming-birthdays query.
//!
//! Dates are pinned around June 2024: the 10th is a Monday, the 15th a
//! Saturday, the 16th a Sunday.

use chrono::NaiveDate;
use contact_assistant::domain::ContactName;
use contact_assistant::{AddressBook, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        let mut record = Record::new(ContactName::new(*name).unwrap());
        record.set_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

#[test]
fn test_birthday_within_week_is_reported() {
    let book = book_with(&[("John", "15.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "John");
}

#[test]
fn test_weekday_greeting_is_the_occurrence_itself() {
    // 2024-06-12 is a Wednesday
    let book = book_with(&[("John", "12.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming[0].greeting_date, "12.06.2024");
}

#[test]
fn test_saturday_greeting_moves_to_monday() {
    let book = book_with(&[("John", "15.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming[0].greeting_date, "17.06.2024");
}

#[test]
fn test_sunday_greeting_moves_to_monday() {
    let book = book_with(&[("John", "16.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming[0].greeting_date, "17.06.2024");
}

#[test]
fn test_birthday_today_counts() {
    let book = book_with(&[("John", "10.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].greeting_date, "10.06.2024");
}

#[test]
fn test_birthday_exactly_a_week_out_counts() {
    let book = book_with(&[("John", "17.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 1);
}

#[test]
fn test_birthday_eight_days_out_does_not_count() {
    let book = book_with(&[("John", "18.06.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert!(upcoming.is_empty());
}

#[test]
fn test_passed_birthday_rolls_to_next_year() {
    let book = book_with(&[("John", "09.06.1985")]);

    // Yesterday's birthday is 364 days away, not -1
    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert!(upcoming.is_empty());
}

#[test]
fn test_year_boundary_rollover() {
    let book = book_with(&[("John", "01.01.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 12, 28), 7);
    assert_eq!(upcoming.len(), 1);
    // 2025-01-01 is a Wednesday
    assert_eq!(upcoming[0].greeting_date, "01.01.2025");
}

#[test]
fn test_leap_day_birthday_observed_on_march_first() {
    let book = book_with(&[("John", "29.02.2020")]);

    // 2025 is not a leap year; the observance lands on Sat 2025-03-01,
    // so the greeting shifts to Monday 2025-03-03
    let upcoming = book.upcoming_birthdays(date(2025, 2, 24), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].greeting_date, "03.03.2025");
}

#[test]
fn test_birth_year_is_ignored_for_the_window() {
    let book = book_with(&[("Old", "15.06.1950"), ("Young", "15.06.2010")]);

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 2);
    assert!(upcoming.iter().all(|g| g.greeting_date == "17.06.2024"));
}

#[test]
fn test_report_preserves_book_order() {
    let book = book_with(&[
        ("Charlie", "14.06.1985"),
        ("Alice", "11.06.1985"),
        ("Bob", "16.06.1985"),
    ]);

    let names: Vec<_> = book
        .upcoming_birthdays(date(2024, 6, 10), 7)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
}
