//! Arts feed: fetch, classify, and union into the game list.

use std::future::Future;

use chrono_tz::Tz;
use tracing::{error, info};

use crate::acquire::HttpFetcher;
use crate::classify::Classifier;
use crate::date_range::DateRange;
use crate::error::EventDeskResult;
use crate::event::Event;
use crate::parse::parse_document;
use crate::record::SourceKind;

/// Where the iCalendar text comes from.
pub trait FeedSource {
    fn fetch_feed(&self) -> impl Future<Output = EventDeskResult<String>>;
}

pub struct FeedClient {
    http: HttpFetcher,
    url: String,
}

impl FeedClient {
    pub fn new(http: HttpFetcher, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

impl FeedSource for FeedClient {
    async fn fetch_feed(&self) -> EventDeskResult<String> {
        self.http.get_text(&self.url).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct SecondaryEvents {
    pub events: Vec<Event>,
    pub diagnostic: Option<String>,
}

impl SecondaryEvents {
    pub fn has_secondary_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Fetch the feed and classify every entry inside `range`.
///
/// An unreachable or unreadable feed means "no arts events this range".
pub async fn collect_secondary<F: FeedSource>(
    feed: &F,
    range: &DateRange,
    tz: Tz,
    classifier: &Classifier,
) -> SecondaryEvents {
    let records = match feed.fetch_feed().await {
        Ok(body) => parse_document(&body, SourceKind::Secondary, tz),
        Err(e) => Err(e),
    };

    let records = match records {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Arts feed unavailable");
            return SecondaryEvents {
                events: Vec::new(),
                diagnostic: Some("Arts events unavailable: the feed could not be read.".to_string()),
            };
        }
    };

    let events: Vec<Event> = records
        .iter()
        .filter(|r| range.contains(r.date))
        .map(|r| classifier.classify(r))
        .collect();

    info!(in_range = events.len(), total = records.len(), "Collected arts events");
    SecondaryEvents {
        events,
        diagnostic: None,
    }
}

/// Union arts events into the game list, ordered by date then time.
pub fn merge_events(primary: Vec<Event>, secondary: Vec<Event>) -> Vec<Event> {
    let mut merged = primary;
    merged.extend(secondary);
    merged.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.time.cmp(&b.time))
            .then_with(|| a.display_title.cmp(&b.display_title))
    });
    merged
}
