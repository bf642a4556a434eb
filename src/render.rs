//! Terminal rendering for digests.
//!
//! Extension traits that add colored output to eventdesk-core types using
//! owo_colors.

use chrono::NaiveDate;
use eventdesk_core::{DayEntry, Digest, Event, EventKind};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let badge = match (self.kind, self.is_home) {
            (EventKind::Secondary, _) => self.badge().blue().to_string(),
            (EventKind::Primary, true) => self.badge().green().to_string(),
            (EventKind::Primary, false) => self.badge().yellow().to_string(),
        };

        format!(
            "{:>8}  {} {} {}",
            self.time_label(),
            self,
            format!("@ {}", self.location).dimmed(),
            badge
        )
    }
}

/// One date heading plus its events, featured first.
fn render_day(date: NaiveDate, entry: &DayEntry, lines: &mut Vec<String>) {
    lines.push(date.format("%A, %B %-d").to_string().bold().to_string());

    let (featured, other) = entry.split_by_tier();
    if featured.is_empty() && other.is_empty() {
        lines.push(format!("   {}", "No events".dimmed()));
        return;
    }

    for event in featured {
        lines.push(format!(" {} {}", "★".yellow(), event.render()));
    }
    for event in other {
        lines.push(format!("   {}", event.render()));
    }
}

impl Render for Digest {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{} ({})", self.text.title.bold(), self.range_label),
            self.hero.clone(),
            String::new(),
        ];

        for (date, entry) in &self.days {
            render_day(*date, entry, &mut lines);
        }

        let quiet = self.quiet_weekdays();
        if !quiet.is_empty() {
            let names: Vec<String> = quiet.iter().map(|d| d.format("%A").to_string()).collect();
            lines.push(String::new());
            lines.push(format!("No events on {}", names.join(", ")).dimmed().to_string());
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {} · {} {}",
            self.event_count(),
            pluralize("event", self.event_count()),
            self.activity_count(),
            pluralize("activity", self.activity_count())
        ));
        if !self.activities.is_empty() {
            lines.push(self.activities.join(", ").dimmed().to_string());
        }

        for diagnostic in &self.diagnostics {
            lines.push(format!("{} {}", "!".yellow(), diagnostic.yellow()));
        }

        lines.join("\n")
    }
}

fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "activity" => "activities",
            _ => word,
        }
    }
}
