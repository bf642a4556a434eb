//! Desk configuration.
//!
//! Read from `~/.config/eventdesk/config.toml` (or an explicit path) and
//! `EVENTDESK_*` environment variables. Every field has a default, so a
//! missing file is a valid configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FEED_URL, DEFAULT_LOAD_MORE_SELECTOR, DEFAULT_SCHEDULE_URL, DEFAULT_TIMEZONE,
    DEFAULT_USER_AGENT, DEFAULT_WEBDRIVER_URL, MAX_LOAD_MORE,
};
use crate::error::{EventDeskError, EventDeskResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// IANA zone every timestamp is normalized into.
    pub timezone: String,
    pub sources: SourcesConfig,
    pub http: HttpConfig,
    pub browser: BrowserConfig,
    pub classify: ClassifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Athletics schedule page (stage-1 GET and stage-2 browser session).
    pub schedule_url: String,
    /// Arts events iCal feed.
    pub feed_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub webdriver_url: String,
    pub load_more_selector: String,
    /// Clamped to [`MAX_LOAD_MORE`].
    pub max_loads: u32,
    pub page_timeout_secs: u64,
    /// Longest wait for new rows after one "load more".
    pub settle_millis: u64,
    pub headless: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Location keywords that mark a home venue.
    pub home_venues: Vec<String>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            timezone: DEFAULT_TIMEZONE.to_string(),
            sources: SourcesConfig::default(),
            http: HttpConfig::default(),
            browser: BrowserConfig::default(),
            classify: ClassifyConfig::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            load_more_selector: DEFAULT_LOAD_MORE_SELECTOR.to_string(),
            max_loads: MAX_LOAD_MORE,
            page_timeout_secs: 30,
            settle_millis: 4000,
            headless: true,
        }
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        ClassifyConfig {
            home_venues: vec!["kent denver".to_string()],
        }
    }
}

impl DeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration, layering environment variables over the file.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> EventDeskResult<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::from(Self::config_path()?).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("EVENTDESK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))
    }

    pub fn from_toml_str(content: &str) -> EventDeskResult<Self> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))
    }

    pub fn tz(&self) -> EventDeskResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| EventDeskError::Config(format!("Unknown timezone '{}': {}", self.timezone, e)))
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl BrowserConfig {
    pub fn load_budget(&self) -> u32 {
        self.max_loads.min(MAX_LOAD_MORE)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_millis)
    }
}
