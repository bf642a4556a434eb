//! One generation pass: acquire, classify, merge, assemble.
//!
//! Every stage is awaited in turn; nothing runs concurrently.

use chrono_tz::Tz;
use tracing::info;

use crate::acquire::{
    BrowserFetcher, Coordinator, HttpFetcher, ListingSource, PaginatedSource, ScheduleClient,
};
use crate::classify::Classifier;
use crate::config::DeskConfig;
use crate::date_range::DateRange;
use crate::digest::Digest;
use crate::error::EventDeskResult;
use crate::record::{RawRecord, sort_records};
use crate::secondary::{FeedClient, FeedSource, collect_secondary, merge_events};

pub struct Pipeline<S1, S2, F> {
    coordinator: Coordinator<S1, S2>,
    feed: F,
    classifier: Classifier,
    tz: Tz,
}

/// The pipeline wired to the live endpoints.
pub type LivePipeline = Pipeline<ScheduleClient, BrowserFetcher, FeedClient>;

impl LivePipeline {
    pub fn from_config(config: &DeskConfig) -> EventDeskResult<Self> {
        let tz = config.tz()?;
        let http = HttpFetcher::new(&config.http)?;

        let stage1 = ScheduleClient::new(http.clone(), &config.sources.schedule_url, tz);
        let stage2 = BrowserFetcher::new(&config.browser, &config.sources.schedule_url);
        let feed = FeedClient::new(http, &config.sources.feed_url);

        Ok(Pipeline::new(
            Coordinator::new(stage1, stage2),
            feed,
            Classifier::new(&config.classify),
            tz,
        ))
    }
}

impl<S1: ListingSource, S2: PaginatedSource, F: FeedSource> Pipeline<S1, S2, F> {
    pub fn new(coordinator: Coordinator<S1, S2>, feed: F, classifier: Classifier, tz: Tz) -> Self {
        Self {
            coordinator,
            feed,
            classifier,
            tz,
        }
    }

    /// Build the digest for `range`. Upstream failures become diagnostics.
    pub async fn run(&self, range: DateRange) -> Digest {
        info!(range = %range.label(), "Generating digest");

        let acquisition = self.coordinator.acquire(&range).await;
        let mut records: Vec<RawRecord> = acquisition
            .records
            .into_iter()
            .filter(|r| range.contains(r.date))
            .collect();
        sort_records(&mut records);
        let games = self.classifier.classify_all(&records);

        let secondary = collect_secondary(&self.feed, &range, self.tz, &self.classifier).await;

        let diagnostics = acquisition
            .diagnostic
            .into_iter()
            .chain(secondary.diagnostic)
            .collect();

        let digest = Digest::assemble(range, merge_events(games, secondary.events), diagnostics);
        info!(
            events = digest.event_count(),
            activities = digest.activity_count(),
            has_secondary_events = digest.has_secondary_events,
            path = ?acquisition.path,
            "Digest ready"
        );
        digest
    }
}
