//! iCalendar feed parsing.
//!
//! This module handles reading the arts feed according to RFC 5545.

mod parse;

pub use parse::parse_feed;
