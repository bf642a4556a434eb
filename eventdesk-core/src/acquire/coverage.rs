//! Does a record set reach the end of the requested range?

use chrono::NaiveDate;

use crate::date_range::DateRange;
use crate::record::RawRecord;

/// Covered iff some record falls on or after `range.end`.
///
/// Assumes upstream lists dates in non-decreasing order; gaps inside the
/// range are not detected.
pub fn is_covered(records: &[RawRecord], range: &DateRange) -> bool {
    records.iter().any(|r| r.date >= range.end)
}

pub fn latest_date(records: &[RawRecord]) -> Option<NaiveDate> {
    records.iter().map(|r| r.date).max()
}
