//! Two-stage acquisition of the athletics schedule.
//!
//! Stage 1 is a single GET of the schedule page. When its rows do not reach
//! the end of the requested range (or the GET fails), stage 2 drives a
//! browser through the page's "load more" control, bounded by
//! [`MAX_LOAD_MORE`](crate::constants::MAX_LOAD_MORE). Stage 2 is never
//! retried.

pub mod browser;
pub mod coverage;
pub mod http;
pub mod stage1;
pub mod stage2;

use std::future::Future;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::date_range::DateRange;
use crate::record::{RawRecord, dedup_records};

pub use browser::{BrowserFetcher, BrowserSession, SessionConnector, WebDriverConnector};
pub use coverage::{is_covered, latest_date};
pub use http::HttpFetcher;
pub use stage1::ScheduleClient;
pub use stage2::{ListingPage, PaginationOutcome, Paginator, StopReason};

/// Records from one fetch attempt. A failed attempt carries no records.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub records: Vec<RawRecord>,
    pub succeeded: bool,
}

impl FetchOutcome {
    pub fn ok(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            succeeded: true,
        }
    }

    pub fn failed() -> Self {
        Self::default()
    }
}

/// The full, unfiltered listing in one request.
pub trait ListingSource {
    fn fetch_listing(&self) -> impl Future<Output = FetchOutcome>;
}

/// A listing that has to be paged through until `range` is reached.
pub trait PaginatedSource {
    fn fetch_paginated(&self, range: &DateRange) -> impl Future<Output = FetchOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionPath {
    /// Stage 1 alone reached the end of the range.
    Stage1,
    /// Stage 2 ran after stage 1 fell short or failed.
    Stage2,
}

#[derive(Debug, Clone)]
pub struct Acquisition {
    /// Unfiltered records; the caller narrows them to the range.
    pub records: Vec<RawRecord>,
    pub path: AcquisitionPath,
    /// False when the result may be missing rows.
    pub complete: bool,
    /// User-facing note when the schedule was unavailable or partial.
    pub diagnostic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stage1,
    Covered,
    NotCovered,
    Stage2,
}

pub struct Coordinator<S1, S2> {
    stage1: S1,
    stage2: S2,
}

impl<S1: ListingSource, S2: PaginatedSource> Coordinator<S1, S2> {
    pub fn new(stage1: S1, stage2: S2) -> Self {
        Self { stage1, stage2 }
    }

    /// Run the acquisition state machine for `range`. Always yields a record
    /// set, possibly empty.
    pub async fn acquire(&self, range: &DateRange) -> Acquisition {
        debug!(state = ?State::Stage1, start = %range.start, end = %range.end, "Acquiring schedule");
        let first = self.stage1.fetch_listing().await;

        let state = if first.succeeded && is_covered(&first.records, range) {
            State::Covered
        } else {
            State::NotCovered
        };
        debug!(
            ?state,
            stage1_ok = first.succeeded,
            latest = ?latest_date(&first.records),
            "Stage 1 evaluated"
        );

        if state == State::Covered {
            info!(records = first.records.len(), "Stage 1 covers the range");
            return Acquisition {
                records: first.records,
                path: AcquisitionPath::Stage1,
                complete: true,
                diagnostic: None,
            };
        }

        debug!(state = ?State::Stage2, "Falling back to browser pagination");
        let second = self.stage2.fetch_paginated(range).await;

        let stage1_ok = first.succeeded;
        let complete = second.succeeded;
        let mut records = first.records;
        records.extend(second.records);
        let records = dedup_records(records);

        let diagnostic = if !stage1_ok && !second.succeeded && records.is_empty() {
            error!("Schedule unavailable: both fetch stages failed");
            Some("Athletics schedule unavailable: both fetch attempts failed.".to_string())
        } else if !complete {
            warn!(records = records.len(), "Schedule may be incomplete");
            Some(format!(
                "Athletics schedule may be incomplete: listing stopped before {}.",
                range.end
            ))
        } else {
            None
        };

        info!(records = records.len(), complete, "Stage 2 finished");
        Acquisition {
            records,
            path: AcquisitionPath::Stage2,
            complete,
            diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SourceKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn on(date: &str) -> RawRecord {
        RawRecord::new(
            SourceKind::Primary,
            date.parse().unwrap(),
            None,
            "Varsity Soccer",
            "Field",
        )
    }

    struct FakeListing {
        outcome: FetchOutcome,
        calls: AtomicUsize,
    }

    impl FakeListing {
        fn new(outcome: FetchOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ListingSource for FakeListing {
        async fn fetch_listing(&self) -> FetchOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    impl PaginatedSource for FakeListing {
        async fn fetch_paginated(&self, _range: &DateRange) -> FetchOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn covered_range_never_runs_stage2() {
        let stage1_records = vec![on("2025-09-30"), on("2025-10-02"), on("2025-10-05")];
        let coordinator = Coordinator::new(
            FakeListing::new(FetchOutcome::ok(stage1_records.clone())),
            FakeListing::new(FetchOutcome::ok(vec![on("2025-10-04")])),
        );

        let range = DateRange::from_args("2025-09-29", "2025-10-05").unwrap();
        let result = coordinator.acquire(&range).await;

        assert_eq!(result.path, AcquisitionPath::Stage1);
        assert_eq!(result.records, stage1_records);
        assert!(result.complete);
        assert!(result.diagnostic.is_none());
        assert_eq!(coordinator.stage2.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn distant_range_falls_back_to_stage2() {
        let coordinator = Coordinator::new(
            FakeListing::new(FetchOutcome::ok(vec![on("2025-11-02"), on("2025-11-30")])),
            FakeListing::new(FetchOutcome::ok(vec![on("2025-11-30"), on("2026-02-06")])),
        );

        let range = DateRange::from_args("2026-02-01", "2026-02-28").unwrap();
        let result = coordinator.acquire(&range).await;

        assert_eq!(result.path, AcquisitionPath::Stage2);
        assert_eq!(coordinator.stage2.calls.load(Ordering::SeqCst), 1);
        // Union of both stages, repeats kept once
        assert_eq!(result.records.len(), 3);
        assert!(result.complete);
    }

    #[tokio::test]
    async fn stage1_failure_falls_back_to_stage2() {
        let coordinator = Coordinator::new(
            FakeListing::new(FetchOutcome::failed()),
            FakeListing::new(FetchOutcome::ok(vec![on("2025-10-01")])),
        );

        let range = DateRange::from_args("2025-09-29", "2025-10-05").unwrap();
        let result = coordinator.acquire(&range).await;

        assert_eq!(result.path, AcquisitionPath::Stage2);
        assert_eq!(result.records.len(), 1);
        assert!(result.diagnostic.is_none());
    }

    #[tokio::test]
    async fn total_failure_is_empty_with_diagnostic() {
        let coordinator = Coordinator::new(
            FakeListing::new(FetchOutcome::failed()),
            FakeListing::new(FetchOutcome::failed()),
        );

        let range = DateRange::from_args("2025-09-29", "2025-10-05").unwrap();
        let result = coordinator.acquire(&range).await;

        assert!(result.records.is_empty());
        assert!(!result.complete);
        assert!(result.diagnostic.unwrap().contains("unavailable"));
    }

    #[tokio::test]
    async fn partial_stage2_keeps_stage1_rows_and_warns() {
        let coordinator = Coordinator::new(
            FakeListing::new(FetchOutcome::ok(vec![on("2025-11-30")])),
            FakeListing {
                outcome: FetchOutcome {
                    records: vec![on("2025-12-14")],
                    succeeded: false,
                },
                calls: AtomicUsize::new(0),
            },
        );

        let range = DateRange::from_args("2026-02-01", "2026-02-28").unwrap();
        let result = coordinator.acquire(&range).await;

        assert_eq!(result.records.len(), 2);
        assert!(!result.complete);
        assert!(result.diagnostic.unwrap().contains("incomplete"));
    }
}
