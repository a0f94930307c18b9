//! Dates for chat line headers.
//!
//! Chat, join, leave and nick lines in the message pane start with the local
//! date they were received on. The [`App`](crate::App) reads the date through
//! a [`Clock`] so tests can pin it.

use chrono::{Local, NaiveDate};

/// Header date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current date.
pub type Clock = fn() -> NaiveDate;

/// Local calendar date from the system clock.
pub fn system_clock() -> NaiveDate {
    Local::now().date_naive()
}

/// Header for a line received on `date`: `[YYYY-MM-DD]`.
pub fn header(date: NaiveDate) -> String {
    format!("[{}]", date.format(DATE_FORMAT))
}
