//! Wall-clock snapshot taken once per render pass.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// The current instant plus the local calendar date it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Now {
    pub instant: DateTime<Utc>,
    pub today: NaiveDate,
}

impl Now {
    pub fn local() -> Self {
        Self::from_local(Local::now())
    }

    /// Snapshot of `dt`, using its own zone for the calendar date.
    pub fn from_local<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Now {
            instant: dt.with_timezone(&Utc),
            today: dt.date_naive(),
        }
    }

    /// Midnight UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Now {
            instant: date.and_time(chrono::NaiveTime::MIN).and_utc(),
            today: date,
        }
    }

    pub fn year(&self) -> i32 {
        self.today.year()
    }
}
