//! Days-until-drop labels.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Now;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How the distance to a release date is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountdownMode {
    /// Whole calendar days between today's local date and the release date.
    #[default]
    CalendarDay,
    /// Release date at UTC midnight minus the current instant, rounded up to
    /// whole days. Matches the web catalog, where the boundary moves with the
    /// time of day.
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "days", rename_all = "kebab-case")]
pub enum Countdown {
    Upcoming(u32),
    Today,
    Released,
}

impl Countdown {
    pub fn compute(release: NaiveDate, now: &Now, mode: CountdownMode) -> Self {
        Self::from_days(days_until(release, now, mode))
    }

    pub fn from_days(days: i64) -> Self {
        match days {
            d if d > 0 => Countdown::Upcoming(u32::try_from(d).unwrap_or(u32::MAX)),
            0 => Countdown::Today,
            _ => Countdown::Released,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Upcoming(1) => write!(f, "Drops in 1 day"),
            Countdown::Upcoming(n) => write!(f, "Drops in {n} days"),
            Countdown::Today => write!(f, "Drops today!"),
            Countdown::Released => write!(f, "Released"),
        }
    }
}

/// Signed whole days from `now` until `release`.
pub fn days_until(release: NaiveDate, now: &Now, mode: CountdownMode) -> i64 {
    match mode {
        CountdownMode::CalendarDay => (release - now.today).num_days(),
        CountdownMode::Timestamp => {
            let release_instant = release.and_time(chrono::NaiveTime::MIN).and_utc();
            let ms = (release_instant - now.instant).num_milliseconds();
            // ceil(ms / day); a fraction in (-1, 0] rounds to 0
            let whole = ms.div_euclid(MS_PER_DAY);
            if ms.rem_euclid(MS_PER_DAY) > 0 {
                whole + 1
            } else {
                whole
            }
        }
    }
}
