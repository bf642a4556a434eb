//! Classified events.
//!
//! A [`RawRecord`](crate::record::RawRecord) becomes an [`Event`] exactly once,
//! in the classifier. Nothing downstream reclassifies.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::record::SourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SchoolLevel {
    MiddleSchool,
    UpperSchool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PriorityTier {
    Featured,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    /// Athletics game.
    Primary,
    /// Arts event; always featured.
    Secondary,
}

/// Presentation hints looked up from a category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub accent_color: &'static str,
    pub border_color: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub display_title: String,
    pub opponent: Option<String>,
    pub location: String,
    /// Normalized category name, e.g. "soccer" or "theater".
    pub activity: &'static str,
    pub school_level: SchoolLevel,
    pub is_home: bool,
    pub is_varsity: bool,
    pub priority_tier: PriorityTier,
    pub style: Style,
    pub kind: EventKind,
}

impl From<SourceKind> for EventKind {
    fn from(source: SourceKind) -> Self {
        match source {
            SourceKind::Primary => EventKind::Primary,
            SourceKind::Secondary => EventKind::Secondary,
        }
    }
}

impl SchoolLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SchoolLevel::MiddleSchool => "Middle School",
            SchoolLevel::UpperSchool => "Upper School",
        }
    }
}

/// Featured iff secondary, or upper-school home/varsity, or middle-school home.
pub fn priority_tier(
    kind: EventKind,
    level: SchoolLevel,
    is_home: bool,
    is_varsity: bool,
) -> PriorityTier {
    let featured = match (kind, level) {
        (EventKind::Secondary, _) => true,
        (EventKind::Primary, SchoolLevel::UpperSchool) => is_home || is_varsity,
        (EventKind::Primary, SchoolLevel::MiddleSchool) => is_home,
    };
    if featured {
        PriorityTier::Featured
    } else {
        PriorityTier::Other
    }
}

impl Event {
    pub fn is_featured(&self) -> bool {
        self.priority_tier == PriorityTier::Featured
    }

    pub fn is_secondary(&self) -> bool {
        self.kind == EventKind::Secondary
    }

    /// "4:00 PM", or "All Day" / "TBA" when there is no time.
    pub fn time_label(&self) -> String {
        match (self.time, self.kind) {
            (Some(t), _) => t.format("%-I:%M %p").to_string(),
            (None, EventKind::Secondary) => "All Day".to_string(),
            (None, EventKind::Primary) => "TBA".to_string(),
        }
    }

    pub fn badge(&self) -> &'static str {
        match (self.kind, self.is_home) {
            (EventKind::Secondary, _) => "Event",
            (EventKind::Primary, true) => "Home",
            (EventKind::Primary, false) => "Away",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style.emoji, self.display_title)?;
        if let Some(opponent) = &self.opponent {
            write!(f, " vs. {}", opponent)?;
        }
        Ok(())
    }
}
