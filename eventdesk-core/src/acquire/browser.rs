//! WebDriver-backed stage-2 source.
//!
//! A session is opened per run, owned by [`BrowserFetcher::fetch_paginated`]
//! and closed on every exit path.

use std::future::Future;
use std::time::Duration;

use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, error, info, warn};

use super::stage2::{ListingPage, Paginator};
use super::{FetchOutcome, PaginatedSource};
use crate::config::BrowserConfig;
use crate::date_range::DateRange;
use crate::error::{EventDeskError, EventDeskResult};

const ROW_SELECTOR: &str = "table tr";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

// =============================================================================
// Session seam
// =============================================================================

/// An open browser session. Exclusively owned by one stage-2 run.
pub trait BrowserSession {
    type Page: ListingPage;

    /// Navigate to `url` and hand back the loaded page.
    fn open_page(&mut self, url: &str) -> impl Future<Output = EventDeskResult<Self::Page>>;

    /// Release the session.
    fn close(self) -> impl Future<Output = EventDeskResult<()>>;
}

/// Opens browser sessions.
pub trait SessionConnector {
    type Session: BrowserSession;

    fn connect(&self) -> impl Future<Output = EventDeskResult<Self::Session>>;
}

// =============================================================================
// Browser Page
// =============================================================================

/// One live schedule page inside a WebDriver session.
pub struct BrowserPage {
    client: Client,
    load_more_selector: String,
    op_timeout: Duration,
    settle: Duration,
}

impl BrowserPage {
    fn new(client: Client, config: &BrowserConfig) -> Self {
        Self {
            client,
            load_more_selector: config.load_more_selector.clone(),
            op_timeout: config.page_timeout(),
            settle: config.settle(),
        }
    }

    /// Bound a WebDriver call by the page timeout.
    async fn bounded<T, E: std::fmt::Display>(
        &self,
        what: &str,
        call: impl Future<Output = Result<T, E>>,
    ) -> EventDeskResult<T> {
        timeout(self.op_timeout, call)
            .await
            .map_err(|_| EventDeskError::Timeout(self.op_timeout.as_secs()))?
            .map_err(|e| EventDeskError::Browser(format!("{what}: {e}")))
    }

    async fn row_count(&self) -> EventDeskResult<usize> {
        let rows = self
            .bounded("count rows", self.client.find_all(Locator::Css(ROW_SELECTOR)))
            .await?;
        Ok(rows.len())
    }

    async fn visible_load_more(&self) -> EventDeskResult<Option<fantoccini::elements::Element>> {
        let candidates = self
            .bounded(
                "find load-more",
                self.client.find_all(Locator::Css(&self.load_more_selector)),
            )
            .await?;

        for candidate in candidates {
            // Stale or unresponsive elements count as hidden
            let displayed = self.bounded("check visibility", candidate.is_displayed()).await;
            if matches!(displayed, Ok(true)) {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

impl ListingPage for BrowserPage {
    async fn page_source(&mut self) -> EventDeskResult<String> {
        self.bounded("read page source", self.client.source()).await
    }

    async fn has_load_more(&mut self) -> EventDeskResult<bool> {
        Ok(self.visible_load_more().await?.is_some())
    }

    async fn trigger_load_more(&mut self) -> EventDeskResult<()> {
        let before = self.row_count().await?;
        let button = self
            .visible_load_more()
            .await?
            .ok_or_else(|| EventDeskError::Browser("load-more control vanished".into()))?;

        self.bounded("click load-more", button.click()).await?;

        // Wait until new rows show up or the settle window closes
        let deadline = Instant::now() + self.settle;
        while Instant::now() < deadline {
            sleep(POLL_INTERVAL).await;
            if self.row_count().await? > before {
                return Ok(());
            }
        }
        debug!(rows = before, "No new rows within settle window");
        Ok(())
    }
}

// =============================================================================
// WebDriver session
// =============================================================================

/// Connects to a WebDriver server (chromedriver, geckodriver).
pub struct WebDriverConnector {
    config: BrowserConfig,
}

pub struct WebDriverSession {
    client: Client,
    config: BrowserConfig,
}

impl WebDriverConnector {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn capabilities(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut args = vec!["--no-sandbox", "--disable-dev-shm-usage", "--window-size=1920,1080"];
        if self.config.headless {
            args.push("--headless=new");
        }

        let firefox_args: Vec<&str> = if self.config.headless {
            vec!["-headless"]
        } else {
            Vec::new()
        };

        let mut caps = serde_json::Map::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        caps.insert("moz:firefoxOptions".to_string(), json!({ "args": firefox_args }));
        caps
    }
}

impl SessionConnector for WebDriverConnector {
    type Session = WebDriverSession;

    async fn connect(&self) -> EventDeskResult<WebDriverSession> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(self.capabilities());

        let connect = builder.connect(&self.config.webdriver_url);
        let client = timeout(self.config.page_timeout(), connect)
            .await
            .map_err(|_| EventDeskError::Timeout(self.config.page_timeout_secs))?
            .map_err(|e| EventDeskError::Browser(format!("WebDriver unavailable: {e}")))?;

        Ok(WebDriverSession {
            client,
            config: self.config.clone(),
        })
    }
}

impl BrowserSession for WebDriverSession {
    type Page = BrowserPage;

    async fn open_page(&mut self, url: &str) -> EventDeskResult<BrowserPage> {
        let page = BrowserPage::new(self.client.clone(), &self.config);
        page.bounded("load schedule page", self.client.goto(url)).await?;
        Ok(page)
    }

    async fn close(self) -> EventDeskResult<()> {
        timeout(self.config.page_timeout(), self.client.close())
            .await
            .map_err(|_| EventDeskError::Timeout(self.config.page_timeout_secs))?
            .map_err(|e| EventDeskError::Browser(format!("close session: {e}")))
    }
}

// =============================================================================
// Browser Fetcher
// =============================================================================

pub struct BrowserFetcher<C = WebDriverConnector> {
    connector: C,
    url: String,
    budget: u32,
}

impl BrowserFetcher {
    pub fn new(config: &BrowserConfig, url: impl Into<String>) -> Self {
        Self::with_connector(WebDriverConnector::new(config), url, config.load_budget())
    }
}

impl<C: SessionConnector> BrowserFetcher<C> {
    pub fn with_connector(connector: C, url: impl Into<String>, budget: u32) -> Self {
        Self {
            connector,
            url: url.into(),
            budget,
        }
    }

    async fn drive(
        &self,
        session: &mut C::Session,
        range: &DateRange,
    ) -> EventDeskResult<FetchOutcome> {
        let mut page = session.open_page(&self.url).await?;

        let paginator = Paginator::new(self.budget);
        let outcome = paginator.run(&mut page, range).await;

        info!(
            loads = outcome.loads,
            budget = paginator.budget(),
            stop = ?outcome.stop,
            records = outcome.records.len(),
            "Browser pagination finished"
        );
        let succeeded = outcome.succeeded();
        Ok(FetchOutcome {
            records: outcome.records,
            succeeded,
        })
    }
}

impl<C: SessionConnector> PaginatedSource for BrowserFetcher<C> {
    async fn fetch_paginated(&self, range: &DateRange) -> FetchOutcome {
        let mut session = match self.connector.connect().await {
            Ok(session) => session,
            Err(e) => {
                error!(error = %e, "Could not start browser session");
                return FetchOutcome::failed();
            }
        };

        let result = self.drive(&mut session, range).await;

        if let Err(e) = session.close().await {
            warn!(error = %e, "Browser session did not close cleanly");
        }

        result.unwrap_or_else(|e| {
            error!(error = %e, "Browser pagination failed");
            FetchOutcome::failed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Shows one more dated row per load.
    #[derive(Clone)]
    struct ScriptedPage {
        dates: Vec<&'static str>,
        shown: usize,
        endless: bool,
    }

    impl ScriptedPage {
        fn new(dates: Vec<&'static str>, endless: bool) -> Self {
            Self {
                dates,
                shown: 1,
                endless,
            }
        }
    }

    impl ListingPage for ScriptedPage {
        async fn page_source(&mut self) -> EventDeskResult<String> {
            let rows: String = self.dates[..self.shown]
                .iter()
                .map(|date| {
                    format!(
                        "<tr><td>Varsity Soccer</td><td>vs. Example High</td><td>{date}</td>\
                         <td>4:00 PM</td><td>Field</td><td>Home</td></tr>"
                    )
                })
                .collect();
            Ok(format!("<table>{rows}</table>"))
        }

        async fn has_load_more(&mut self) -> EventDeskResult<bool> {
            Ok(self.endless || self.shown < self.dates.len())
        }

        async fn trigger_load_more(&mut self) -> EventDeskResult<()> {
            self.shown = (self.shown + 1).min(self.dates.len());
            Ok(())
        }
    }

    struct FakeSession {
        page: Option<ScriptedPage>,
        closes: Arc<AtomicUsize>,
        close_fails: bool,
    }

    impl BrowserSession for FakeSession {
        type Page = ScriptedPage;

        async fn open_page(&mut self, _url: &str) -> EventDeskResult<ScriptedPage> {
            self.page
                .take()
                .ok_or_else(|| EventDeskError::Browser("navigation failed".into()))
        }

        async fn close(self) -> EventDeskResult<()> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            if self.close_fails {
                return Err(EventDeskError::Timeout(30));
            }
            Ok(())
        }
    }

    struct FakeConnector {
        page: Option<ScriptedPage>,
        reachable: bool,
        close_fails: bool,
        closes: Arc<AtomicUsize>,
    }

    impl FakeConnector {
        fn new(page: Option<ScriptedPage>) -> Self {
            Self {
                page,
                reachable: true,
                close_fails: false,
                closes: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl SessionConnector for FakeConnector {
        type Session = FakeSession;

        async fn connect(&self) -> EventDeskResult<FakeSession> {
            if !self.reachable {
                return Err(EventDeskError::Browser("WebDriver unavailable".into()));
            }
            Ok(FakeSession {
                page: self.page.clone(),
                closes: Arc::clone(&self.closes),
                close_fails: self.close_fails,
            })
        }
    }

    fn fetcher(
        connector: FakeConnector,
        budget: u32,
    ) -> (BrowserFetcher<FakeConnector>, Arc<AtomicUsize>) {
        let closes = Arc::clone(&connector.closes);
        let url = "https://example.test/schedule";
        (BrowserFetcher::with_connector(connector, url, budget), closes)
    }

    fn range() -> DateRange {
        DateRange::from_args("2025-10-01", "2025-10-03").unwrap()
    }

    #[tokio::test]
    async fn session_closed_after_coverage() {
        let page = ScriptedPage::new(vec!["2025-10-01", "2025-10-02", "2025-10-03"], false);
        let (fetcher, closes) = fetcher(FakeConnector::new(Some(page)), 50);

        let outcome = fetcher.fetch_paginated(&range()).await;

        assert!(outcome.succeeded);
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn session_closed_when_bound_is_hit() {
        let page = ScriptedPage::new(vec!["2025-09-01"], true);
        let (fetcher, closes) = fetcher(FakeConnector::new(Some(page)), 3);

        let outcome = fetcher.fetch_paginated(&range()).await;

        assert!(!outcome.succeeded);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn session_closed_when_page_fails_to_load() {
        let (fetcher, closes) = fetcher(FakeConnector::new(None), 50);

        let outcome = fetcher.fetch_paginated(&range()).await;

        assert!(!outcome.succeeded);
        assert!(outcome.records.is_empty());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_close_keeps_the_records() {
        let page = ScriptedPage::new(vec!["2025-10-03"], false);
        let mut connector = FakeConnector::new(Some(page));
        connector.close_fails = true;
        let (fetcher, closes) = fetcher(connector, 50);

        let outcome = fetcher.fetch_paginated(&range()).await;

        assert!(outcome.succeeded);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unreachable_webdriver_yields_failed_outcome() {
        let mut connector = FakeConnector::new(None);
        connector.reachable = false;
        let (fetcher, closes) = fetcher(connector, 50);

        let outcome = fetcher.fetch_paginated(&range()).await;

        assert!(!outcome.succeeded);
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }
}
