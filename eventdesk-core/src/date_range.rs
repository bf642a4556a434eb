//! Requested date windows.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EventDeskError, EventDeskResult};

/// Inclusive calendar-date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Monday..Sunday window derived from a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> EventDeskResult<Self> {
        if start > end {
            return Err(EventDeskError::InvalidDate(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(DateRange { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        DateRange {
            start: date,
            end: date,
        }
    }

    /// Parse `--start-date` / `--end-date` style arguments (YYYY-MM-DD).
    pub fn from_args(start: &str, end: &str) -> EventDeskResult<Self> {
        DateRange::new(parse_ymd(start)?, parse_ymd(end)?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// ISO week of the first day; the key for text rotation.
    pub fn iso_week(&self) -> u32 {
        self.start.iso_week().week()
    }

    /// Human label, e.g. "September 22–28, 2025".
    pub fn label(&self) -> String {
        let (s, e) = (self.start, self.end);
        if s == e {
            format!("{}", s.format("%B %-d, %Y"))
        } else if s.year() == e.year() && s.month() == e.month() {
            format!("{}–{}, {}", s.format("%B %-d"), e.day(), s.year())
        } else if s.year() == e.year() {
            format!("{}–{}, {}", s.format("%B %-d"), e.format("%B %-d"), s.year())
        } else {
            format!("{}–{}", s.format("%B %-d, %Y"), e.format("%B %-d, %Y"))
        }
    }
}

impl WeekWindow {
    /// The week containing `reference`.
    pub fn containing(reference: NaiveDate) -> Self {
        let start = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
        WeekWindow {
            start,
            end: start + Duration::days(6),
        }
    }

    /// The week after the one containing `reference`.
    pub fn following(reference: NaiveDate) -> Self {
        Self::containing(reference + Duration::days(7))
    }

    pub fn iso_week(&self) -> u32 {
        self.start.iso_week().week()
    }
}

impl From<WeekWindow> for DateRange {
    fn from(week: WeekWindow) -> Self {
        DateRange {
            start: week.start,
            end: week.end,
        }
    }
}

fn parse_ymd(s: &str) -> EventDeskResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| EventDeskError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s)))
}
