//! Calendar render pass: a month grid with today and drop days marked.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Now;
use crate::cursor::CalendarCursor;
use crate::date::{days_in_month, first_weekday};
use crate::sneaker::Catalog;

pub const DAYS_PER_WEEK: usize = 7;

/// Label attached to every day with at least one release.
pub const DROP_INDICATOR: &str = "Drop";

/// A numbered day in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    pub is_release: bool,
    /// `DROP_INDICATOR` on release days.
    pub indicator: Option<&'static str>,
    /// Ids of the records dropping on this day, in catalog order.
    pub release_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CalendarCell {
    /// Padding before day 1 or after the last day.
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CalendarCell::Day(day) => Some(day),
            CalendarCell::Blank => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub cursor: CalendarCursor,
    pub heading: String,
    /// Leading blanks followed by one cell per day. No trailing padding.
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn build(cursor: CalendarCursor, catalog: &Catalog, now: &Now) -> Self {
        let (month, year) = (cursor.month(), cursor.year());
        let leading = first_weekday(month, year) as usize;
        let day_count = days_in_month(month, year);

        let mut cells = Vec::with_capacity(leading + day_count as usize);
        cells.extend(std::iter::repeat_n(CalendarCell::Blank, leading));

        for day in 1..=day_count {
            // Years outside chrono's range cannot hold today or any release.
            let date = NaiveDate::from_ymd_opt(year, month + 1, day);
            let release_ids: Vec<u32> = date
                .map(|d| catalog.releases_on(d).map(|r| r.id).collect())
                .unwrap_or_default();

            let is_release = !release_ids.is_empty();
            cells.push(CalendarCell::Day(DayCell {
                day,
                is_today: date == Some(now.today),
                is_release,
                indicator: is_release.then_some(DROP_INDICATOR),
                release_ids,
            }));
        }

        let grid = CalendarGrid {
            cursor,
            heading: cursor.heading(),
            cells,
        };
        tracing::debug!(
            heading = %grid.heading,
            leading,
            day_count,
            releases = grid.release_days().count(),
            "built calendar grid"
        );
        grid
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, CalendarCell::Blank))
            .count()
    }

    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(CalendarCell::as_day)
    }

    pub fn release_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days().filter(|d| d.is_release)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.days().find(|d| d.is_today)
    }

    /// Rows of seven cells, the last one padded with blanks.
    pub fn weeks(&self) -> Vec<Vec<CalendarCell>> {
        self.cells
            .chunks(DAYS_PER_WEEK)
            .map(|week| {
                let mut row = week.to_vec();
                row.resize(DAYS_PER_WEEK, CalendarCell::Blank);
                row
            })
            .collect()
    }
}
