//! Raw record parsing for both upstream document kinds.

mod dates;
mod schedule;

use chrono_tz::Tz;

use crate::error::EventDeskResult;
use crate::record::{RawRecord, SourceKind};

pub use dates::{parse_schedule_date, parse_schedule_time};
pub use schedule::parse_schedule;

/// Parse one fetched document into raw records.
///
/// Malformed entries are skipped with a warning. Only a feed that cannot be
/// read as iCalendar at all is an error; schedule markup never fails.
pub fn parse_document(fragment: &str, source: SourceKind, tz: Tz) -> EventDeskResult<Vec<RawRecord>> {
    match source {
        // Schedule pages already print local wall-clock times
        SourceKind::Primary => Ok(parse_schedule(fragment)),
        SourceKind::Secondary => crate::ics::parse_feed(fragment, tz),
    }
}
