//! The (month, year) pair the calendar is showing.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::month_name;
use crate::error::{DropCalError, DropCalResult};

/// Month is zero-based and always in 0..=11. The year is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCursor {
    month: u32,
    year: i32,
}

impl CalendarCursor {
    pub fn new(month: u32, year: i32) -> DropCalResult<Self> {
        if month > 11 {
            return Err(DropCalError::InvalidMonth(month));
        }
        Ok(CalendarCursor { month, year })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        CalendarCursor {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Advance one month, rolling December over into January of the next year.
    /// Stays put on December of `i32::MAX`.
    pub fn next(&mut self) {
        if self.month < 11 {
            self.month += 1;
        } else if let Some(year) = self.year.checked_add(1) {
            self.month = 0;
            self.year = year;
        }
    }

    /// Go back one month, rolling January back into December of the previous year.
    /// Stays put on January of `i32::MIN`.
    pub fn previous(&mut self) {
        if self.month > 0 {
            self.month -= 1;
        } else if let Some(year) = self.year.checked_sub(1) {
            self.month = 11;
            self.year = year;
        }
    }

    /// Apply `steps` navigations: forward when positive, backward when negative.
    /// Clamped to the first and last representable months.
    pub fn offset(&mut self, steps: i64) {
        let first = i64::from(i32::MIN) * 12;
        let last = i64::from(i32::MAX) * 12 + 11;
        let total = (i64::from(self.year) * 12 + i64::from(self.month))
            .saturating_add(steps)
            .clamp(first, last);
        self.year = total.div_euclid(12) as i32;
        self.month = total.rem_euclid(12) as u32;
    }

    /// e.g. "June 2024"
    pub fn heading(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}
