//! Athletics schedule table parsing.
//!
//! Expected row layout: `team | opponent | date | time | location | advantage`.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::dates::{parse_schedule_date, parse_schedule_time};
use crate::record::{RawRecord, SourceKind, dedup_records};

const MIN_CELLS: usize = 6;

/// Parse the schedule rows of the first table in `html`.
///
/// Other tables on the page are layout and are ignored. Header and spacer
/// rows (fewer than six cells) are skipped silently; rows with a missing
/// team or an unreadable date are skipped with a warning.
pub fn parse_schedule(html: &str) -> Vec<RawRecord> {
    let document = Html::parse_document(html);

    let (Ok(table_selector), Ok(row_selector), Ok(cell_selector)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("td"),
    ) else {
        return Vec::new();
    };

    let Some(table) = document.select(&table_selector).next() else {
        debug!("No schedule table on page");
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in table.select(&row_selector).enumerate() {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        match parse_row(&cells) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                warn!(row = index, %reason, "Skipping malformed schedule row");
            }
        }
    }

    let records = dedup_records(records);
    debug!(parsed = records.len(), skipped, "Parsed schedule document");
    records
}

fn parse_row(cells: &[String]) -> Result<RawRecord, String> {
    let team = cells[0].trim();
    if team.is_empty() {
        return Err("empty team cell".to_string());
    }

    let date = parse_schedule_date(&cells[2])
        .ok_or_else(|| format!("could not parse date '{}'", cells[2]))?;

    let mut record = RawRecord::new(
        SourceKind::Primary,
        date,
        parse_schedule_time(&cells[3]),
        team,
        cells[4].trim(),
    );
    record.opponent = non_empty(strip_versus(&cells[1]));
    // A blank advantage cell is still an answer (away)
    record.advantage = Some(cells[5].trim().to_string());

    Ok(record)
}

/// Text content of a cell with whitespace runs collapsed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_versus(opponent: &str) -> &str {
    let trimmed = opponent.trim();
    for prefix in ["vs.", "vs", "@"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return rest.trim();
        }
    }
    trimmed
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
