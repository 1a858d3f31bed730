//! Row classification.
//!
//! Every sheet row is given exactly one [`RowKind`]. The checks run in a fixed
//! order: week markers, then day headers, then warmup section markers, then
//! the skip list, and finally the exercise fallback.

use crate::patterns::{
    capture_number, DAY_HEADER_PREFIX, KNOWN_SECTION_TITLES, SKIP_LABELS, WEEK_NUMBER,
};
use crate::types::{col, Row, WarmupType};

/// What a single sheet row represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// `Week N` marker carrying the raw week number from the sheet
    WeekMarker(u32),
    /// Start of a new workout
    DayHeader,
    /// `Primers` / `Switch Ons` label opening a warmup block
    WarmupSectionMarker(WarmupType),
    /// Blank or administrative row
    Skippable,
    /// Anything else with a label in the first column
    Exercise,
}

/// Classify a row
pub fn classify(row: &Row) -> RowKind {
    let code = row.cell(col::CODE);
    let name = row.cell(col::NAME);

    if let Some(week) = week_marker(code, name) {
        return RowKind::WeekMarker(week);
    }

    if is_day_header(code) || is_day_header(name) {
        return RowKind::DayHeader;
    }

    if let Some(warmup) = warmup_marker(code) {
        return RowKind::WarmupSectionMarker(warmup);
    }

    if is_skippable(code) {
        return RowKind::Skippable;
    }

    RowKind::Exercise
}

/// Raw week number when either leading cell mentions `week N`
pub fn week_marker(code: &str, name: &str) -> Option<u32> {
    capture_number(&WEEK_NUMBER, &format!("{} {}", code, name))
}

/// True for `Day N ...` labels and the known un-numbered section titles
pub fn is_day_header(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return false;
    }

    DAY_HEADER_PREFIX.is_match(&text)
        || KNOWN_SECTION_TITLES
            .iter()
            .any(|title| text.contains(title))
}

/// Warmup block opened by a `Primers` or `Switch Ons` label
pub fn warmup_marker(code: &str) -> Option<WarmupType> {
    let code = code.to_lowercase();
    if code.contains("primers") {
        Some(WarmupType::Primers)
    } else if code.contains("switch") {
        Some(WarmupType::Switch)
    } else {
        None
    }
}

/// Blank first column, or a label from the administrative stop-list
pub fn is_skippable(code: &str) -> bool {
    let code = code.trim().to_lowercase();
    code.is_empty() || SKIP_LABELS.iter().any(|label| code.contains(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_week_marker_in_either_column() {
        assert_eq!(classify(&row(&["Week 2"])), RowKind::WeekMarker(2));
        assert_eq!(classify(&row(&["", "WEEK 3"])), RowKind::WeekMarker(3));
        assert_eq!(classify(&row(&["week4", "Deload"])), RowKind::WeekMarker(4));
    }

    #[test]
    fn test_week_without_number_is_not_a_marker() {
        assert_eq!(week_marker("Weekly notes", ""), None);
    }

    #[test]
    fn test_week_marker_wins_over_day_header() {
        assert_eq!(classify(&row(&["Week 1", "Day 1"])), RowKind::WeekMarker(1));
    }

    #[test]
    fn test_day_header_checks_both_columns() {
        assert_eq!(classify(&row(&["Day 1", "Upper Focus"])), RowKind::DayHeader);
        assert_eq!(classify(&row(&["", "day 2"])), RowKind::DayHeader);
        assert_eq!(classify(&row(&["  DAY 3  "])), RowKind::DayHeader);
    }

    #[test]
    fn test_known_section_titles_are_day_headers() {
        assert!(is_day_header("Lower Strength"));
        assert!(is_day_header("FULL BODY circuit"));
        assert!(is_day_header("Workout B"));
        assert!(!is_day_header("Day one"));
        assert!(!is_day_header(""));
    }

    #[test]
    fn test_warmup_markers() {
        assert_eq!(
            classify(&row(&["Primers"])),
            RowKind::WarmupSectionMarker(WarmupType::Primers)
        );
        assert_eq!(
            classify(&row(&["SWITCH ONS", "activation"])),
            RowKind::WarmupSectionMarker(WarmupType::Switch)
        );
    }

    #[test]
    fn test_skippable_rows() {
        assert_eq!(classify(&row(&[])), RowKind::Skippable);
        assert_eq!(classify(&row(&["", "Orphan name"])), RowKind::Skippable);
        assert_eq!(classify(&row(&["Notes", "drink water"])), RowKind::Skippable);
        assert_eq!(classify(&row(&["Body Weight"])), RowKind::Skippable);
        assert_eq!(classify(&row(&["SCALES"])), RowKind::Skippable);
        assert_eq!(classify(&row(&["Date"])), RowKind::Skippable);
    }

    #[test]
    fn test_exercise_rows() {
        assert_eq!(classify(&row(&["A1", "Push Up", "3"])), RowKind::Exercise);
        assert_eq!(classify(&row(&["1.", "Cat-Cow"])), RowKind::Exercise);
        assert_eq!(classify(&row(&["Plank"])), RowKind::Exercise);
    }
}
