//! Month-by-month navigation of the calendar.

use std::fmt;

use crate::clock::Now;
use crate::cursor::CalendarCursor;
use crate::grid::CalendarGrid;
use crate::sneaker::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Previous => write!(f, "Previous month"),
            Navigation::Next => write!(f, "Next month"),
        }
    }
}

/// Owns the cursor and re-renders the grid after every move.
#[derive(Debug, Clone)]
pub struct CalendarController {
    cursor: CalendarCursor,
}

impl CalendarController {
    /// Start on the month containing `now`.
    pub fn new(now: &Now) -> Self {
        CalendarController {
            cursor: CalendarCursor::from_date(now.today),
        }
    }

    pub fn with_cursor(cursor: CalendarCursor) -> Self {
        CalendarController { cursor }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn render(&self, catalog: &Catalog, now: &Now) -> CalendarGrid {
        CalendarGrid::build(self.cursor, catalog, now)
    }

    pub fn navigate(
        &mut self,
        direction: Navigation,
        catalog: &Catalog,
        now: &Now,
    ) -> CalendarGrid {
        match direction {
            Navigation::Previous => self.cursor.previous(),
            Navigation::Next => self.cursor.next(),
        }
        tracing::debug!(?direction, heading = %self.cursor.heading(), "navigated");
        self.render(catalog, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now(y: i32, m: u32, d: u32) -> Now {
        Now::on(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn starts_on_current_month() {
        let controller = CalendarController::new(&now(2024, 6, 10));
        assert_eq!(controller.cursor(), CalendarCursor::new(5, 2024).unwrap());
    }

    #[test]
    fn next_from_december_lands_in_january() {
        let catalog = Catalog::sample().unwrap();
        let today = now(2024, 12, 3);
        let mut controller = CalendarController::new(&today);
        let grid = controller.navigate(Navigation::Next, &catalog, &today);
        assert_eq!(grid.heading, "January 2025");
        assert_eq!(controller.cursor(), CalendarCursor::new(0, 2025).unwrap());
    }

    #[test]
    fn previous_from_january_lands_in_december() {
        let catalog = Catalog::sample().unwrap();
        let today = now(2024, 1, 3);
        let mut controller = CalendarController::new(&today);
        let grid = controller.navigate(Navigation::Previous, &catalog, &today);
        assert_eq!(grid.heading, "December 2023");
    }

    #[test]
    fn navigating_to_drop_months() {
        let catalog = Catalog::sample().unwrap();
        let today = now(2024, 5, 20);
        let mut controller = CalendarController::new(&today);
        let june = controller.navigate(Navigation::Next, &catalog, &today);
        assert_eq!(june.release_days().map(|d| d.day).collect::<Vec<_>>(), vec![15, 22, 28]);
        let july = controller.navigate(Navigation::Next, &catalog, &today);
        assert_eq!(july.release_days().map(|d| d.day).collect::<Vec<_>>(), vec![5, 12, 18]);
        assert!(july.today().is_none());
    }

    #[test]
    fn controller_can_start_anywhere() {
        let catalog = Catalog::sample().unwrap();
        let today = now(2026, 10, 18);
        let cursor = CalendarCursor::new(6, 2024).unwrap();
        let mut controller = CalendarController::with_cursor(cursor);
        assert_eq!(controller.render(&catalog, &today).heading, "July 2024");
        let june = controller.navigate(Navigation::Previous, &catalog, &today);
        assert_eq!(june.release_days().count(), 3);
    }

    #[test]
    fn render_does_not_move_the_cursor() {
        let catalog = Catalog::sample().unwrap();
        let today = now(2024, 6, 10);
        let controller = CalendarController::new(&today);
        assert_eq!(controller.render(&catalog, &today), controller.render(&catalog, &today));
        assert_eq!(controller.cursor().heading(), "June 2024");
    }
}
