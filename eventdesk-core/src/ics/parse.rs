//! Arts feed parsing using the icalendar crate's parser.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::{debug, warn};

use crate::error::{EventDeskError, EventDeskResult};
use crate::record::{RawRecord, SourceKind, dedup_records};

const UNTITLED: &str = "Untitled Event";
const UNKNOWN_LOCATION: &str = "TBA";

/// Parse every VEVENT of an iCalendar document into records.
///
/// Timestamps are converted into `tz`. A VEVENT without a usable DTSTART is
/// skipped with a warning; only an unreadable document is an error.
pub fn parse_feed(content: &str, tz: Tz) -> EventDeskResult<Vec<RawRecord>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| EventDeskError::FeedParse(e.to_string()))?;

    let mut vevents = Vec::new();
    collect_vevents(&calendar.components, &mut vevents);

    let mut records = Vec::with_capacity(vevents.len());
    for vevent in vevents {
        match parse_vevent(vevent, tz) {
            Some(record) => records.push(record),
            None => {
                let summary = vevent.find_prop("SUMMARY").map(|p| p.val.to_string());
                warn!(summary = ?summary, "Skipping feed entry without a usable DTSTART");
            }
        }
    }

    let records = dedup_records(records);
    debug!(parsed = records.len(), "Parsed feed document");
    Ok(records)
}

fn collect_vevents<'a>(components: &'a [Component<'a>], out: &mut Vec<&'a Component<'a>>) {
    for component in components {
        if component.name == "VEVENT" {
            out.push(component);
        } else {
            collect_vevents(&component.components, out);
        }
    }
}

fn parse_vevent(vevent: &Component<'_>, tz: Tz) -> Option<RawRecord> {
    let start = DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?;
    let (date, time) = local_start(start, tz)?;

    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape_text(p.val.as_ref()))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());
    let location = vevent
        .find_prop("LOCATION")
        .map(|p| unescape_text(p.val.as_ref()))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

    let categories: Vec<String> = vevent
        .properties
        .iter()
        .filter(|p| p.name == "CATEGORIES")
        .flat_map(|p| split_list(p.val.as_ref()))
        .collect();

    let mut record = RawRecord::new(SourceKind::Secondary, date, time, summary.trim(), location.trim());
    record.categories = categories;
    Some(record)
}

/// Convert DTSTART into a local date and (for timed events) time of day.
fn local_start(start: DatePerhapsTime, tz: Tz) -> Option<(NaiveDate, Option<NaiveTime>)> {
    let local = match start {
        DatePerhapsTime::Date(date) => return Some((date, None)),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.with_timezone(&tz).naive_local(),
            CalendarDateTime::Floating(naive) => naive,
            CalendarDateTime::WithTimezone { date_time, tzid } => match tzid.parse::<Tz>() {
                Ok(source_tz) => zoned(source_tz, date_time)?
                    .with_timezone(&tz)
                    .naive_local(),
                // Unknown zone names are taken as already local
                Err(_) => date_time,
            },
        },
    };
    Some((local.date(), Some(local.time())))
}

/// Resolve a wall-clock time in `zone`.
///
/// Ambiguous times take the first occurrence. Times inside a DST gap use the
/// offset in effect before the gap, which moves them forward by the gap's
/// length (RFC 5545 section 3.3.5).
fn zoned(zone: Tz, wall: NaiveDateTime) -> Option<DateTime<Tz>> {
    match zone.from_local_datetime(&wall) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let before = zone
                .offset_from_local_datetime(&(wall - TimeDelta::hours(3)))
                .earliest()?
                .fix();
            let utc = wall - TimeDelta::seconds(i64::from(before.local_minus_utc()));
            Some(zone.from_utc_datetime(&utc))
        }
    }
}

/// Undo RFC 5545 TEXT escaping. Escaped newlines become spaces.
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push(' '),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Split a comma-separated TEXT list, honoring `\,` escapes.
fn split_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for c in value.chars() {
        match (escaped, c) {
            (true, _) => {
                current.push('\\');
                current.push(c);
                escaped = false;
            }
            (false, '\\') => escaped = true,
            (false, ',') => items.push(std::mem::take(&mut current)),
            (false, _) => current.push(c),
        }
    }
    items.push(current);

    items
        .iter()
        .map(|item| unescape_text(item).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
