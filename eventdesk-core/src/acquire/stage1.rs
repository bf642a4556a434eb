//! Stage 1: one plain GET of the schedule page.

use chrono_tz::Tz;
use tracing::{info, warn};

use super::http::HttpFetcher;
use super::{FetchOutcome, ListingSource};
use crate::parse::parse_document;
use crate::record::SourceKind;

pub struct ScheduleClient {
    http: HttpFetcher,
    url: String,
    tz: Tz,
}

impl ScheduleClient {
    pub fn new(http: HttpFetcher, url: impl Into<String>, tz: Tz) -> Self {
        Self {
            http,
            url: url.into(),
            tz,
        }
    }
}

impl ListingSource for ScheduleClient {
    async fn fetch_listing(&self) -> FetchOutcome {
        let body = match self.http.get_text(&self.url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %self.url, error = %e, "Schedule fetch failed");
                return FetchOutcome::failed();
            }
        };

        match parse_document(&body, SourceKind::Primary, self.tz) {
            Ok(records) => {
                info!(records = records.len(), "Fetched schedule listing");
                FetchOutcome::ok(records)
            }
            Err(e) => {
                warn!(error = %e, "Schedule page could not be parsed");
                FetchOutcome::failed()
            }
        }
    }
}
