/// Hard ceiling on "load more" triggers in one stage-2 session.
pub const MAX_LOAD_MORE: u32 = 50;

/// Every text pool holds exactly this many entries.
pub const ROTATION_SLOTS: usize = 12;

pub const DEFAULT_TIMEZONE: &str = "America/Denver";

pub const DEFAULT_SCHEDULE_URL: &str =
    "https://www.kentdenver.org/athletics-wellness/schedules-and-scores";

pub const DEFAULT_FEED_URL: &str =
    "https://www.kentdenver.org/cf_calendar/feed.cfm?type=ical&feedID=8017725D73BE4200B7C10FDFFBB83FAF";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

pub const DEFAULT_LOAD_MORE_SELECTOR: &str =
    "button.load-more, a.load-more, .fsLoadMoreButton, [data-action='load-more']";
