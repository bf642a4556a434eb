//! Category lookup tables.
//!
//! Matching is case-insensitive substring, first entry wins, so table order
//! matters.

use crate::event::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Normalized activity name carried on the event.
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub style: Style,
}

const fn entry(
    name: &'static str,
    keywords: &'static [&'static str],
    emoji: &'static str,
    accent_color: &'static str,
    border_color: &'static str,
) -> CategoryStyle {
    CategoryStyle {
        name,
        keywords,
        style: Style {
            accent_color,
            border_color,
            emoji,
        },
    }
}

const GREEN: &str = "linear-gradient(135deg, #22c55e 0%, #16a34a 100%)";
const RED: &str = "linear-gradient(135deg, #dc2626 0%, #991b1b 100%)";
const CYAN: &str = "linear-gradient(135deg, #06b6d4 0%, #0891b2 100%)";
const YELLOW: &str = "linear-gradient(135deg, #eab308 0%, #ca8a04 100%)";
const VIOLET: &str = "linear-gradient(135deg, #8b5cf6 0%, #7c3aed 100%)";
const PINK: &str = "linear-gradient(135deg, #ec4899 0%, #db2777 100%)";
const AMBER: &str = "linear-gradient(135deg, #f59e0b 0%, #d97706 100%)";
const ORANGE: &str = "linear-gradient(135deg, #f97316 0%, #ea580c 100%)";
const EMERALD: &str = "linear-gradient(135deg, #10b981 0%, #059669 100%)";
const BLUE: &str = "linear-gradient(135deg, #3b82f6 0%, #2563eb 100%)";
const SLATE: &str = "linear-gradient(135deg, #64748b 0%, #475569 100%)";
const GRAY: &str = "linear-gradient(135deg, #6b7280 0%, #4b5563 100%)";

pub static SPORTS: &[CategoryStyle] = &[
    entry("soccer", &["soccer"], "⚽", GREEN, "#22c55e"),
    entry("football", &["football"], "🏈", RED, "#dc2626"),
    entry("tennis", &["tennis"], "🎾", CYAN, "#06b6d4"),
    entry("golf", &["golf"], "⛳", YELLOW, "#eab308"),
    entry("cross country", &["cross country", "xc"], "🏃", VIOLET, "#8b5cf6"),
    entry("field hockey", &["field hockey"], "🏑", PINK, "#ec4899"),
    entry("volleyball", &["volleyball"], "🏐", AMBER, "#f59e0b"),
    entry("basketball", &["basketball"], "🏀", ORANGE, "#f97316"),
    entry("lacrosse", &["lacrosse"], "🥍", EMERALD, "#10b981"),
    entry("baseball", &["baseball"], "⚾", BLUE, "#3b82f6"),
    entry("swimming", &["swimming"], "🏊", CYAN, "#06b6d4"),
    entry("track", &["track"], "🏃", VIOLET, "#8b5cf6"),
    entry("ice hockey", &["ice hockey"], "🏒", SLATE, "#64748b"),
];

pub static SPORT_FALLBACK: CategoryStyle = entry("other", &[], "🏆", GRAY, "#6b7280");

pub static ARTS: &[CategoryStyle] = &[
    entry("dance", &["dance"], "💃", PINK, "#ec4899"),
    entry("music", &["music"], "🎵", VIOLET, "#8b5cf6"),
    entry("theater", &["theater", "theatre"], "🎭", AMBER, "#f59e0b"),
    entry("visual", &["visual"], "🎨", CYAN, "#06b6d4"),
    entry("art", &["art"], "🎨", CYAN, "#06b6d4"),
    entry("concert", &["concert"], "🎶", VIOLET, "#8b5cf6"),
    entry("performance", &["performance"], "🎵", ORANGE, "#f97316"),
    entry("showcase", &["showcase"], "✨", YELLOW, "#eab308"),
    entry("exhibit", &["exhibit"], "🖼️", CYAN, "#06b6d4"),
];

/// Unmatched arts entries are shown as performances.
pub static ARTS_FALLBACK: CategoryStyle =
    entry("performance", &["performance"], "🎵", ORANGE, "#f97316");

/// First table entry with a keyword contained in `text`.
pub fn lookup(table: &'static [CategoryStyle], text: &str) -> Option<&'static CategoryStyle> {
    let text = text.to_lowercase();
    table
        .iter()
        .find(|category| category.keywords.iter().any(|k| text.contains(k)))
}

pub fn sport_for(team: &str) -> &'static CategoryStyle {
    lookup(SPORTS, team).unwrap_or(&SPORT_FALLBACK)
}

/// Match the title first, then any CATEGORIES hint.
pub fn arts_for(title: &str, categories: &[String]) -> &'static CategoryStyle {
    lookup(ARTS, title)
        .or_else(|| categories.iter().find_map(|c| lookup(ARTS, c)))
        .unwrap_or(&ARTS_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sports_match_case_insensitively() {
        assert_eq!(sport_for("Varsity Girls SOCCER").name, "soccer");
        assert_eq!(sport_for("MS Field Hockey").name, "field hockey");
        assert_eq!(sport_for("Boys XC").name, "cross country");
    }

    #[test]
    fn unknown_sport_falls_back_to_neutral_style() {
        let other = sport_for("Varsity Ultimate Frisbee");
        assert_eq!(other.name, "other");
        assert_eq!(other.style.emoji, "🏆");
        assert_eq!(other.style.border_color, "#6b7280");
    }

    #[test]
    fn theatre_spelling_is_an_alias() {
        assert_eq!(arts_for("Upper School Theatre: Our Town", &[]).name, "theater");
    }

    #[test]
    fn categories_are_a_secondary_hint() {
        let cats = vec!["Dance".to_string()];
        assert_eq!(arts_for("Fall Showcase", &cats).name, "showcase");
        assert_eq!(arts_for("Evening with Alumni", &cats).name, "dance");
        assert_eq!(arts_for("Evening with Alumni", &[]).name, "performance");
    }

    #[test]
    fn every_entry_has_keywords() {
        for category in SPORTS.iter().chain(ARTS) {
            assert!(!category.keywords.is_empty(), "{} has no keywords", category.name);
        }
    }
}
