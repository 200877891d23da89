//! Monday-aligned week resolution.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::SyncError;

/// A Monday-aligned seven-day span. `end` is exclusive and always exactly
/// seven days after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Resolve the window for the week containing `date`. If `date` is not
    /// a Monday, it snaps backward to the most recent Monday.
    pub fn containing(date: NaiveDate) -> Self {
        let back = i64::from(date.weekday().num_days_from_monday());
        let start = date - Duration::days(back);
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    /// Parse a `YYYY-MM-DD` date string and resolve its window.
    pub fn parse(s: &str) -> Result<Self, SyncError> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| SyncError::Config(format!("invalid week start {s:?} (want YYYY-MM-DD): {e}")))?;
        Ok(Self::containing(date))
    }

    /// The date `offset` days after the window start.
    pub fn day(&self, offset: u32) -> NaiveDate {
        self.start + Duration::days(i64::from(offset))
    }
}

/// English weekday name, e.g. "Monday".
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
