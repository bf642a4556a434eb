//! Core of the eventdesk weekly digest.
//!
//! This crate turns the athletics schedule page and the arts iCal feed into a
//! classified, date-ordered digest:
//! - `acquire` fetches the schedule, falling back to bounded browser pagination
//! - `parse` and `ics` turn fetched documents into raw records
//! - `classify` maps raw records to typed events
//! - `secondary` merges the arts feed
//! - `variants` picks the week's rotating text
//! - `digest` and `pipeline` assemble the result for renderers

pub mod acquire;
pub mod classify;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod digest;
pub mod error;
pub mod event;
pub mod ics;
pub mod parse;
pub mod pipeline;
pub mod record;
pub mod secondary;
pub mod variants;

pub use config::DeskConfig;
pub use date_range::{DateRange, WeekWindow};
pub use digest::{DayEntry, Digest};
pub use error::{EventDeskError, EventDeskResult};
pub use event::{Event, EventKind, PriorityTier, SchoolLevel};
pub use pipeline::{LivePipeline, Pipeline};
pub use record::{RawRecord, SourceKind};
