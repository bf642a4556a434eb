//! Raw record → classified [`Event`].
//!
//! Classification is pure and deterministic: the same record and the same
//! [`ClassifyConfig`] always produce the same event.

pub mod tables;

use tracing::trace;

use crate::config::ClassifyConfig;
use crate::event::{Event, EventKind, SchoolLevel, priority_tier};
use crate::record::RawRecord;

/// Single words or phrases that mark a middle-school team.
const MIDDLE_SCHOOL_KEYWORDS: &[&str] = &[
    "middle school",
    "ms",
    "6th",
    "7th",
    "8th",
    "sixth",
    "seventh",
    "eighth",
];

const NON_VARSITY_KEYWORDS: &[&str] = &["jv", "junior varsity", "c team"];

const VARSITY_KEYWORDS: &[&str] = &["varsity", "var"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarsityMarker {
    /// "Varsity", "Var" or a leading "V".
    Explicit,
    /// JV, C team or any middle-school keyword.
    Negative,
    Unmarked,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    home_venues: Vec<String>,
}

impl Classifier {
    pub fn new(config: &ClassifyConfig) -> Self {
        Classifier {
            home_venues: config
                .home_venues
                .iter()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect(),
        }
    }

    pub fn classify(&self, record: &RawRecord) -> Event {
        let kind = EventKind::from(record.source);
        let event = match kind {
            EventKind::Primary => self.classify_game(record),
            EventKind::Secondary => classify_arts(record),
        };
        trace!(title = %record.title, tier = ?event.priority_tier, "Classified record");
        event
    }

    pub fn classify_all(&self, records: &[RawRecord]) -> Vec<Event> {
        records.iter().map(|r| self.classify(r)).collect()
    }

    fn classify_game(&self, record: &RawRecord) -> Event {
        let (team, title_opponent) = split_title(&record.title);
        let school_level = school_level(team);
        let is_home = self.is_home(record);
        let is_varsity = match varsity_marker(team) {
            VarsityMarker::Explicit => true,
            VarsityMarker::Negative => false,
            VarsityMarker::Unmarked => school_level == SchoolLevel::UpperSchool,
        };
        let sport = tables::sport_for(team);

        let opponent = record
            .opponent
            .as_deref()
            .map(strip_markers)
            .filter(|o| !o.is_empty())
            .or(title_opponent);

        Event {
            date: record.date,
            time: record.time,
            display_title: team.to_string(),
            opponent,
            location: record.location.clone(),
            activity: sport.name,
            school_level,
            is_home,
            is_varsity,
            priority_tier: priority_tier(EventKind::Primary, school_level, is_home, is_varsity),
            style: sport.style,
            kind: EventKind::Primary,
        }
    }

    /// Advantage hint, then a `(Home)`/`(Away)` marker, then home venues.
    ///
    /// A present advantage cell decides on its own; a blank one means away.
    fn is_home(&self, record: &RawRecord) -> bool {
        if let Some(advantage) = record.advantage.as_deref() {
            return advantage.trim().eq_ignore_ascii_case("home");
        }

        let title = record.title.to_lowercase();
        let location = record.location.to_lowercase();
        for text in [&title, &location] {
            if text.contains("(home)") {
                return true;
            }
            if text.contains("(away)") {
                return false;
            }
        }

        self.home_venues.iter().any(|venue| location.contains(venue))
    }
}

fn classify_arts(record: &RawRecord) -> Event {
    let title = record.title.trim();
    let school_level = school_level(title);
    let category = tables::arts_for(title, &record.categories);

    Event {
        date: record.date,
        time: record.time,
        display_title: title.to_string(),
        opponent: None,
        location: record.location.clone(),
        activity: category.name,
        school_level,
        is_home: true,
        is_varsity: false,
        priority_tier: priority_tier(EventKind::Secondary, school_level, true, false),
        style: category.style,
        kind: EventKind::Secondary,
    }
}

pub fn school_level(text: &str) -> SchoolLevel {
    let text = text.to_lowercase();
    if MIDDLE_SCHOOL_KEYWORDS.iter().any(|k| mentions(&text, k)) {
        SchoolLevel::MiddleSchool
    } else {
        SchoolLevel::UpperSchool
    }
}

pub fn varsity_marker(team: &str) -> VarsityMarker {
    let team = team.to_lowercase();

    let negative = NON_VARSITY_KEYWORDS
        .iter()
        .chain(MIDDLE_SCHOOL_KEYWORDS)
        .any(|k| mentions(&team, k));
    if negative {
        return VarsityMarker::Negative;
    }

    let leading_v = words(&team).next() == Some("v");
    if leading_v || VARSITY_KEYWORDS.iter().any(|k| mentions(&team, k)) {
        VarsityMarker::Explicit
    } else {
        VarsityMarker::Unmarked
    }
}

/// Split "Team vs. Opponent (Home)" into the team and the opponent.
fn split_title(title: &str) -> (&str, Option<String>) {
    let lower = title.to_ascii_lowercase();
    let cut = [" vs", " @ "]
        .iter()
        .filter_map(|sep| lower.find(sep).map(|at| (at, sep.len())))
        .min_by_key(|(at, _)| *at);

    let Some((at, sep_len)) = cut else {
        return (strip_marker_slice(title), None);
    };

    let team = strip_marker_slice(&title[..at]);
    let rest = title[at + sep_len..].trim_start_matches('.');
    let opponent = strip_markers(rest);
    (team, (!opponent.is_empty()).then_some(opponent))
}

/// Remove `(Home)` / `(Away)` markers, case-insensitively.
fn strip_markers(text: &str) -> String {
    let mut out = text.to_string();
    for marker in ["(home)", "(away)"] {
        while let Some(at) = out.to_ascii_lowercase().find(marker) {
            out.replace_range(at..at + marker.len(), "");
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Team text before a trailing marker, without allocating.
fn strip_marker_slice(text: &str) -> &str {
    let trimmed = text.trim();
    let lower = trimmed.to_ascii_lowercase();
    for marker in ["(home)", "(away)"] {
        if lower.ends_with(marker) {
            return trimmed[..trimmed.len() - marker.len()].trim_end();
        }
    }
    trimmed
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Phrases match as substrings; single words must match a whole word.
fn mentions(text: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        text.contains(keyword)
    } else {
        words(text).any(|w| w == keyword)
    }
}
