//! Resolve the requested date window from command-line flags.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eventdesk_core::{DateRange, WeekWindow};

/// Which window the user asked for. `NextWeek` is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowRequest {
    ThisWeek,
    NextWeek,
    Today,
    Custom { start: String, end: String },
}

impl WindowRequest {
    pub fn from_flags(
        this_week: bool,
        next_week: bool,
        today: bool,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        match (start_date, end_date) {
            (Some(start), Some(end)) => WindowRequest::Custom { start, end },
            _ if next_week => WindowRequest::NextWeek,
            _ if this_week => WindowRequest::ThisWeek,
            _ if today => WindowRequest::Today,
            _ => WindowRequest::NextWeek,
        }
    }

    /// Turn the request into a concrete range relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange> {
        let range = match self {
            WindowRequest::ThisWeek => WeekWindow::containing(today).into(),
            WindowRequest::NextWeek => WeekWindow::following(today).into(),
            WindowRequest::Today => DateRange::single_day(today),
            WindowRequest::Custom { start, end } => DateRange::from_args(start, end)
                .with_context(|| format!("Invalid date range {} to {}", start, end))?,
        };
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 25).unwrap()
    }

    #[test]
    fn next_week_is_the_default() {
        let request = WindowRequest::from_flags(false, false, false, None, None);
        assert_eq!(request, WindowRequest::NextWeek);

        let range = request.resolve(thursday()).unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 9, 29).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 10, 5).unwrap());
    }

    #[test]
    fn this_week_starts_on_monday() {
        let range = WindowRequest::ThisWeek.resolve(thursday()).unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 9, 22).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 9, 28).unwrap());
    }

    #[test]
    fn today_is_a_single_day() {
        let range = WindowRequest::Today.resolve(thursday()).unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn custom_range_wins_and_is_validated() {
        let request = WindowRequest::from_flags(
            true,
            false,
            false,
            Some("2026-02-01".into()),
            Some("2026-02-28".into()),
        );
        assert!(matches!(request, WindowRequest::Custom { .. }));
        assert_eq!(request.resolve(thursday()).unwrap().iso_week(), 5);

        let reversed = WindowRequest::Custom {
            start: "2026-02-28".into(),
            end: "2026-02-01".into(),
        };
        assert!(reversed.resolve(thursday()).is_err());
    }
}
