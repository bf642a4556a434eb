//! Date and time text as the schedule page prints it.

use chrono::{NaiveDate, NaiveTime};

/// Parse a schedule date cell.
///
/// Accepts compacted (`Sep222025`, `Oct32025`), spaced (`Sep 22 2025`,
/// `Sep 22, 2025`), ISO and US numeric forms. For a multi-day span
/// (`Oct202025-Oct212025`) the first date wins.
pub fn parse_schedule_date(raw: &str) -> Option<NaiveDate> {
    let text = first_of_span(raw.trim());

    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    parse_month_day_year(text).or_else(|| {
        // "Saturday, Sep 22 2025"
        let (_, rest) = text.split_once(',')?;
        parse_month_day_year(rest.trim())
    })
}

/// Parse a schedule time cell. `TBA` and friends yield `None`.
pub fn parse_schedule_time(raw: &str) -> Option<NaiveTime> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect::<String>()
        .to_uppercase();

    if compact.is_empty() {
        return None;
    }

    let meridiem_at = match (compact.rfind("AM"), compact.rfind("PM")) {
        (Some(a), Some(p)) => Some(a.max(p)),
        (a, p) => a.or(p),
    };

    match meridiem_at {
        Some(pos) => {
            let clock = &compact[..pos];
            let meridiem = &compact[pos..pos + 2];
            let clock = if clock.contains(':') {
                clock.to_string()
            } else {
                format!("{clock}:00")
            };
            NaiveTime::parse_from_str(&format!("{clock} {meridiem}"), "%I:%M %p").ok()
        }
        None => NaiveTime::parse_from_str(&compact, "%H:%M").ok(),
    }
}

fn first_of_span(text: &str) -> &str {
    if text.len() <= 15 {
        return text;
    }
    if let Some((first, _)) = text.split_once(" - ") {
        return first.trim();
    }
    // Only month-name spans; ISO dates contain dashes of their own.
    if text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        if let Some((first, _)) = text.split_once('-') {
            return first.trim();
        }
    }
    text
}

fn parse_month_day_year(text: &str) -> Option<NaiveDate> {
    let letters: String = text
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    let month = month_number(&letters)?;

    let digits: String = text[letters.len()..]
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let (day, year) = match digits.len() {
        5 => digits.split_at(1),
        6 => digits.split_at(2),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn compacted_dates() {
        assert_eq!(parse_schedule_date("Sep222025"), Some(d(2025, 9, 22)));
        assert_eq!(parse_schedule_date("Oct32025"), Some(d(2025, 10, 3)));
    }

    #[test]
    fn spaced_dates() {
        assert_eq!(parse_schedule_date("Sep 22 2025"), Some(d(2025, 9, 22)));
        assert_eq!(parse_schedule_date("Sep 22, 2025"), Some(d(2025, 9, 22)));
        assert_eq!(parse_schedule_date("  Oct 3 2025 "), Some(d(2025, 10, 3)));
        assert_eq!(parse_schedule_date("September 22 2025"), Some(d(2025, 9, 22)));
        assert_eq!(parse_schedule_date("Saturday, Sep 27 2025"), Some(d(2025, 9, 27)));
    }

    #[test]
    fn numeric_dates() {
        assert_eq!(parse_schedule_date("2025-09-22"), Some(d(2025, 9, 22)));
        assert_eq!(parse_schedule_date("09/22/2025"), Some(d(2025, 9, 22)));
    }

    #[test]
    fn spans_take_first_date() {
        assert_eq!(parse_schedule_date("Oct202025-Oct212025"), Some(d(2025, 10, 20)));
        assert_eq!(parse_schedule_date("Oct 20 2025 - Oct 21 2025"), Some(d(2025, 10, 20)));
    }

    #[test]
    fn garbage_dates() {
        assert_eq!(parse_schedule_date(""), None);
        assert_eq!(parse_schedule_date("TBD"), None);
        assert_eq!(parse_schedule_date("Sep 2025"), None);
        assert_eq!(parse_schedule_date("Feb302025"), None);
    }

    #[test]
    fn twelve_hour_times() {
        assert_eq!(parse_schedule_time("4:00 PM"), NaiveTime::from_hms_opt(16, 0, 0));
        assert_eq!(parse_schedule_time("4:30pm"), NaiveTime::from_hms_opt(16, 30, 0));
        assert_eq!(parse_schedule_time("10:15 a.m."), NaiveTime::from_hms_opt(10, 15, 0));
        assert_eq!(parse_schedule_time("7 PM"), NaiveTime::from_hms_opt(19, 0, 0));
        assert_eq!(parse_schedule_time("12:00 PM"), NaiveTime::from_hms_opt(12, 0, 0));
    }

    #[test]
    fn twenty_four_hour_times() {
        assert_eq!(parse_schedule_time("16:45"), NaiveTime::from_hms_opt(16, 45, 0));
    }

    #[test]
    fn missing_times() {
        assert_eq!(parse_schedule_time("TBA"), None);
        assert_eq!(parse_schedule_time(""), None);
        assert_eq!(parse_schedule_time("   "), None);
    }
}
