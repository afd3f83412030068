//! Calendar arithmetic shared by the catalog and calendar render passes.
//!
//! Months are zero-based (January = 0) throughout, matching `CalendarCursor`.
//! Weekday indices start at Sunday = 0.

use chrono::{Datelike, NaiveDate};

use crate::error::{DropCalError, DropCalResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short weekday labels in column order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month offsets for Sakamoto's day-of-week method.
const WEEKDAY_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

pub fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Number of days in `month0` of `year`. Months past 11 are treated as December.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of the 1st of `month0` in `year` (Sunday = 0).
///
/// Pure arithmetic on the proleptic Gregorian calendar, so it works for any
/// year the cursor can reach, including ones outside chrono's date range.
pub fn first_weekday(month0: u32, year: i32) -> u32 {
    let month0 = month0.min(11) as usize;
    let y = i64::from(year) - i64::from(month0 < 2);
    let w = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + WEEKDAY_OFFSETS[month0]
        + 1;
    w.rem_euclid(7) as u32
}

pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0.min(11) as usize]
}

/// Format a date as "June 15, 2024".
pub fn format_long(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month0()), date.day(), date.year())
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso(s: &str) -> DropCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DropCalError::InvalidDate(s.to_string()))
}
