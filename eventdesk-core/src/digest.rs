//! The assembled output of one generation pass.
//!
//! Every date of the range is present, either with its events or with an
//! explicit [`DayEntry::NoEvents`] marker.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::date_range::DateRange;
use crate::event::{Event, SchoolLevel};
use crate::variants::{self, TextSelection};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "events", rename_all = "snake_case")]
pub enum DayEntry {
    Events(Vec<Event>),
    NoEvents,
}

impl DayEntry {
    pub fn events(&self) -> &[Event] {
        match self {
            DayEntry::Events(events) => events,
            DayEntry::NoEvents => &[],
        }
    }

    /// `(featured, other)`, each in schedule order.
    pub fn split_by_tier(&self) -> (Vec<&Event>, Vec<&Event>) {
        self.events().iter().partition(|e| e.is_featured())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub range: DateRange,
    pub range_label: String,
    pub iso_week: u32,
    pub days: BTreeMap<NaiveDate, DayEntry>,
    pub has_secondary_events: bool,
    /// Distinct activity names, title-cased and sorted.
    pub activities: Vec<String>,
    pub text: TextSelection,
    /// Hero text with the activity count substituted.
    pub hero: String,
    pub diagnostics: Vec<String>,
}

impl Digest {
    /// Group `events` by date over the whole range and pick the week's text.
    ///
    /// Events outside the range are dropped; input order within a date is
    /// kept.
    pub fn assemble(range: DateRange, events: Vec<Event>, diagnostics: Vec<String>) -> Self {
        let mut grouped: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in events.into_iter().filter(|e| range.contains(e.date)) {
            grouped.entry(event.date).or_default().push(event);
        }

        let days: BTreeMap<NaiveDate, DayEntry> = range
            .days()
            .map(|date| {
                let entry = match grouped.remove(&date) {
                    Some(events) => DayEntry::Events(events),
                    None => DayEntry::NoEvents,
                };
                (date, entry)
            })
            .collect();

        let has_secondary_events = days
            .values()
            .flat_map(DayEntry::events)
            .any(Event::is_secondary);
        let activities = activity_names(days.values().flat_map(DayEntry::events));
        let iso_week = range.iso_week();
        let text = variants::select(iso_week, has_secondary_events);

        Digest {
            range,
            range_label: range.label(),
            iso_week,
            hero: text.hero_with_count(activities.len()),
            days,
            has_secondary_events,
            activities,
            text,
            diagnostics,
        }
    }

    /// The digest restricted to one school level, flag and text recomputed.
    pub fn for_level(&self, level: SchoolLevel) -> Self {
        let events = self
            .events()
            .filter(|e| e.school_level == level)
            .cloned()
            .collect();
        Digest::assemble(self.range, events, self.diagnostics.clone())
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.days.values().flat_map(DayEntry::events)
    }

    pub fn event_count(&self) -> usize {
        self.events().count()
    }

    pub fn is_empty(&self) -> bool {
        self.event_count() == 0
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Monday to Friday dates with no events that fall strictly between two
    /// dates that do have events.
    pub fn quiet_weekdays(&self) -> Vec<NaiveDate> {
        let busy: Vec<NaiveDate> = self
            .days
            .iter()
            .filter(|(_, entry)| !entry.events().is_empty())
            .map(|(date, _)| *date)
            .collect();

        let (Some(first), Some(last)) = (busy.first(), busy.last()) else {
            return Vec::new();
        };
        if busy.len() < 2 {
            return Vec::new();
        }

        self.days
            .iter()
            .filter(|(date, entry)| {
                entry.events().is_empty()
                    && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                    && *first < **date
                    && **date < *last
            })
            .map(|(date, _)| *date)
            .collect()
    }
}

fn activity_names<'a>(events: impl Iterator<Item = &'a Event>) -> Vec<String> {
    events
        .map(|e| title_case(e.activity))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
