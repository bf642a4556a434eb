//! Plain HTTP reads shared by stage-1 and the feed merger.

use tokio::time::timeout;
use tracing::debug;

use crate::config::HttpConfig;
use crate::error::{EventDeskError, EventDeskResult};

/// HTTP client configured with the desk's user agent and request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: HttpConfig,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> EventDeskResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// GET `url` and return the body. Non-success statuses are errors.
    pub async fn get_text(&self, url: &str) -> EventDeskResult<String> {
        // The client timeout covers each request; this also bounds body reads.
        timeout(self.config.timeout(), self.get_text_inner(url))
            .await
            .map_err(|_| EventDeskError::Timeout(self.config.timeout_secs))?
    }

    async fn get_text_inner(&self, url: &str) -> EventDeskResult<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EventDeskError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}
