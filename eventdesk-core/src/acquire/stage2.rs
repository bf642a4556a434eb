//! Stage 2: bounded "load more" pagination over a live page.
//!
//! The loop is written against [`ListingPage`] so the termination rules can
//! be exercised without a browser.

use std::future::Future;

use tracing::{debug, warn};

use super::coverage::is_covered;
use crate::constants::MAX_LOAD_MORE;
use crate::date_range::DateRange;
use crate::error::EventDeskResult;
use crate::parse::parse_schedule;
use crate::record::RawRecord;

/// A loaded schedule page with a "load more" affordance.
pub trait ListingPage {
    /// Full markup of everything loaded so far.
    fn page_source(&mut self) -> impl Future<Output = EventDeskResult<String>>;

    fn has_load_more(&mut self) -> impl Future<Output = EventDeskResult<bool>>;

    /// Trigger one load and wait for the new rows to settle.
    fn trigger_load_more(&mut self) -> impl Future<Output = EventDeskResult<()>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Records reach the end of the range.
    Covered,
    /// The affordance disappeared; the listing is complete.
    Exhausted,
    /// The load budget ran out with the affordance still present.
    BoundReached,
    /// The page stopped answering.
    Failed,
}

#[derive(Debug, Clone)]
pub struct PaginationOutcome {
    pub records: Vec<RawRecord>,
    pub loads: u32,
    pub stop: StopReason,
}

impl PaginationOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.stop, StopReason::Covered | StopReason::Exhausted)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    budget: u32,
}

impl Paginator {
    /// Budgets above [`MAX_LOAD_MORE`] are clamped.
    pub fn new(budget: u32) -> Self {
        Self {
            budget: budget.min(MAX_LOAD_MORE),
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub async fn run<P: ListingPage>(&self, page: &mut P, range: &DateRange) -> PaginationOutcome {
        let mut records = match page.page_source().await {
            Ok(html) => parse_schedule(&html),
            Err(e) => {
                warn!(error = %e, "Could not read initial page");
                return self.stop(Vec::new(), 0, StopReason::Failed);
            }
        };
        let mut loads = 0;

        loop {
            if is_covered(&records, range) {
                return self.stop(records, loads, StopReason::Covered);
            }

            match page.has_load_more().await {
                Ok(true) => {}
                Ok(false) => return self.stop(records, loads, StopReason::Exhausted),
                Err(e) => {
                    warn!(error = %e, "Could not look for load-more control");
                    return self.stop(records, loads, StopReason::Failed);
                }
            }

            if loads >= self.budget {
                return self.stop(records, loads, StopReason::BoundReached);
            }

            if let Err(e) = page.trigger_load_more().await {
                warn!(error = %e, loads, "Load-more failed");
                return self.stop(records, loads, StopReason::Failed);
            }
            loads += 1;

            // Re-parse the whole document; rows loaded earlier are still in it
            match page.page_source().await {
                Ok(html) => records = parse_schedule(&html),
                Err(e) => {
                    warn!(error = %e, loads, "Could not read page after load");
                    return self.stop(records, loads, StopReason::Failed);
                }
            }
            debug!(loads, records = records.len(), "Loaded more rows");
        }
    }

    fn stop(&self, records: Vec<RawRecord>, loads: u32, stop: StopReason) -> PaginationOutcome {
        debug!(?stop, loads, records = records.len(), "Pagination stopped");
        PaginationOutcome {
            records,
            loads,
            stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventDeskError;

    fn row(date: &str) -> String {
        format!(
            "<tr><td>Varsity Soccer</td><td>vs. Example High</td><td>{date}</td><td>4:00 PM</td><td>Field</td><td>Home</td></tr>"
        )
    }

    /// In-memory page: each load appends the next batch of rows.
    struct FakePage {
        loaded: Vec<String>,
        pending: Vec<Vec<String>>,
        /// Keep offering "load more" after the batches run out.
        endless: bool,
        triggers: u32,
        fail_after: Option<u32>,
    }

    impl FakePage {
        fn new(initial: &[&str], batches: &[&[&str]]) -> Self {
            Self {
                loaded: initial.iter().map(|d| row(d)).collect(),
                pending: batches
                    .iter()
                    .rev()
                    .map(|batch| batch.iter().map(|d| row(d)).collect())
                    .collect(),
                endless: false,
                triggers: 0,
                fail_after: None,
            }
        }
    }

    impl ListingPage for FakePage {
        async fn page_source(&mut self) -> EventDeskResult<String> {
            Ok(format!("<table>{}</table>", self.loaded.concat()))
        }

        async fn has_load_more(&mut self) -> EventDeskResult<bool> {
            Ok(self.endless || !self.pending.is_empty())
        }

        async fn trigger_load_more(&mut self) -> EventDeskResult<()> {
            if self.fail_after == Some(self.triggers) {
                return Err(EventDeskError::Browser("session lost".into()));
            }
            self.triggers += 1;
            if let Some(batch) = self.pending.pop() {
                self.loaded.extend(batch);
            }
            Ok(())
        }
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::from_args(start, end).unwrap()
    }

    #[tokio::test]
    async fn stops_as_soon_as_range_is_covered() {
        let mut page = FakePage::new(
            &["Sep222025"],
            &[&["Sep292025"], &["Oct62025"], &["Oct132025"]],
        );
        let outcome = Paginator::new(50)
            .run(&mut page, &range("2025-10-01", "2025-10-06"))
            .await;

        assert_eq!(outcome.stop, StopReason::Covered);
        assert_eq!(outcome.loads, 2);
        assert_eq!(outcome.records.len(), 3);
        assert!(outcome.succeeded());
    }

    #[tokio::test]
    async fn missing_affordance_ends_the_listing() {
        let mut page = FakePage::new(&["Sep222025"], &[&["Sep292025"]]);
        let outcome = Paginator::new(50)
            .run(&mut page, &range("2026-02-01", "2026-02-28"))
            .await;

        assert_eq!(outcome.stop, StopReason::Exhausted);
        assert_eq!(outcome.loads, 1);
        assert!(outcome.succeeded());
    }

    #[tokio::test]
    async fn never_ending_affordance_hits_the_bound() {
        let mut page = FakePage::new(&["Sep222025"], &[]);
        page.endless = true;

        let outcome = Paginator::new(500)
            .run(&mut page, &range("2026-02-01", "2026-02-28"))
            .await;

        assert_eq!(outcome.stop, StopReason::BoundReached);
        assert_eq!(outcome.loads, MAX_LOAD_MORE);
        assert_eq!(page.triggers, MAX_LOAD_MORE);
        assert_eq!(outcome.records.len(), 1);
        assert!(!outcome.succeeded());
    }

    #[tokio::test]
    async fn failure_mid_loop_keeps_accumulated_rows() {
        let mut page = FakePage::new(&["Sep222025"], &[&["Sep292025"], &["Oct62025"]]);
        page.fail_after = Some(1);

        let outcome = Paginator::new(50)
            .run(&mut page, &range("2026-02-01", "2026-02-28"))
            .await;

        assert_eq!(outcome.stop, StopReason::Failed);
        assert_eq!(outcome.loads, 1);
        assert_eq!(outcome.records.len(), 2);
    }

    #[tokio::test]
    async fn zero_budget_never_clicks() {
        let mut page = FakePage::new(&["Sep222025"], &[&["Sep292025"]]);
        let outcome = Paginator::new(0)
            .run(&mut page, &range("2026-02-01", "2026-02-28"))
            .await;

        assert_eq!(outcome.stop, StopReason::BoundReached);
        assert_eq!(page.triggers, 0);
    }
}
