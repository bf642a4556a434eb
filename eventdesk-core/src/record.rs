//! Untyped records as they come off a page or feed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Which upstream a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Athletics schedule page.
    Primary,
    /// Arts calendar feed.
    Secondary,
}

/// One parsed row or VEVENT, before classification.
///
/// Dates and times are already in the canonical timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub location: String,
    pub source: SourceKind,
    /// Opponent cell of the schedule table, `vs.` stripped.
    pub opponent: Option<String>,
    /// Advantage cell of the schedule table ("Home" / "Away"), possibly blank.
    /// `None` only when the source has no such cell.
    pub advantage: Option<String>,
    /// CATEGORIES of a feed entry.
    pub categories: Vec<String>,
}

impl RawRecord {
    pub fn new(
        source: SourceKind,
        date: NaiveDate,
        time: Option<NaiveTime>,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        RawRecord {
            date,
            time,
            title: title.into(),
            location: location.into(),
            source,
            opponent: None,
            advantage: None,
            categories: Vec::new(),
        }
    }
}

/// Drop exact repeats, keeping first occurrences in order.
pub fn dedup_records(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut seen = std::collections::HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}

/// Sort by date, then time (untimed first), then title.
pub fn sort_records(records: &mut [RawRecord]) {
    records.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.time.cmp(&b.time))
            .then_with(|| a.title.cmp(&b.title))
    });
}
