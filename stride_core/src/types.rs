//! Core domain types for the Stride training plan.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw sheet rows with positional cell access
//! - Training phases and their week ranges
//! - Workouts and exercises produced by the assembler
//! - Superset and warmup tags

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Sheet Rows
// ============================================================================

/// Conventional column positions in a training sheet.
///
/// Header names vary from sheet to sheet and are not trusted, so every
/// consumer addresses cells by position.
pub mod col {
    pub const CODE: usize = 0;
    pub const NAME: usize = 1;
    pub const SETS: usize = 2;
    pub const REPS: usize = 3;
    pub const TEMPO: usize = 4;
    pub const LOAD: usize = 5;
    pub const REST: usize = 6;
    pub const NOTES: usize = 7;
}

/// One row of a sheet as an ordered tuple of cells
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Cell at `index`, or `""` when the row is shorter than that
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// True when every cell is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Phases
// ============================================================================

/// A named multi-week block of the training plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tab id of this phase inside the published sheet
    #[serde(default)]
    pub gid: Option<String>,
    pub week_start: u32,
    pub week_end: u32,
}

impl PhaseInfo {
    /// Number of weeks covered by the phase (inclusive range)
    pub fn span(&self) -> u32 {
        self.week_end.saturating_sub(self.week_start) + 1
    }

    pub fn contains_week(&self, week: u32) -> bool {
        (self.week_start..=self.week_end).contains(&week)
    }
}

// ============================================================================
// Warmups and Supersets
// ============================================================================

/// Warmup block an exercise belongs to
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WarmupType {
    Primers,
    Switch,
    #[default]
    None,
}

impl WarmupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarmupType::Primers => "primers",
            WarmupType::Switch => "switch",
            WarmupType::None => "none",
        }
    }

    pub fn is_warmup(&self) -> bool {
        !matches!(self, WarmupType::None)
    }

    /// Group label shared by every exercise of one warmup block
    pub fn group(&self) -> Option<String> {
        self.is_warmup().then(|| format!("warmup-{}", self.as_str()))
    }
}

impl fmt::Display for WarmupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Superset membership derived from a code such as `A1` or `b2`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupersetTag {
    pub id: char,
    pub order: u32,
}

// ============================================================================
// Workouts
// ============================================================================

/// A single exercise inside a workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub tempo: String,
    pub load: String,
    pub rest: String,
    pub notes: String,
    pub video_url: Option<String>,
    pub superset_id: Option<char>,
    pub superset_order: Option<u32>,
    pub is_part_of_superset: bool,
    pub is_warmup: bool,
    pub warmup_type: WarmupType,
    pub warmup_group: Option<String>,
}

impl Exercise {
    pub fn superset(&self) -> Option<SupersetTag> {
        match (self.superset_id, self.superset_order) {
            (Some(id), Some(order)) => Some(SupersetTag { id, order }),
            _ => None,
        }
    }
}

/// One training day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub title: String,
    pub description: String,
    pub phase: String,
    pub week: u32,
    pub day: String,
    pub day_number: u32,
    pub duration: String,
    pub exercises: Vec<Exercise>,
}

/// Canonical workout id for a phase, week and day
pub fn workout_id(phase: &str, week: u32, day_number: u32) -> String {
    format!("{}-week{}-day{}", phase, week, day_number)
}

/// Exercise id for the `position`-th (1-based) exercise of a workout
pub fn exercise_id(workout_id: &str, position: usize) -> String {
    format!("{}-ex{}", workout_id, position)
}

/// Exercise id for the `position`-th (1-based) row of a warmup block
pub fn warmup_exercise_id(workout_id: &str, warmup: WarmupType, position: usize) -> String {
    format!("{}-warmup-{}{}", workout_id, warmup.as_str(), position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cell_defaults_to_empty() {
        let row: Row = ["A1", "Push Up"].into_iter().collect();
        assert_eq!(row.cell(col::CODE), "A1");
        assert_eq!(row.cell(col::NAME), "Push Up");
        assert_eq!(row.cell(col::NOTES), "");
        assert_eq!(row.cells().len(), 2);
    }

    #[test]
    fn test_row_is_blank() {
        let row: Row = ["", "  ", "\t"].into_iter().collect();
        assert!(row.is_blank());

        let row: Row = ["", "x"].into_iter().collect();
        assert!(!row.is_blank());
    }

    #[test]
    fn test_phase_span() {
        let phase = PhaseInfo {
            id: "build".into(),
            name: "Build".into(),
            description: String::new(),
            gid: None,
            week_start: 5,
            week_end: 8,
        };
        assert_eq!(phase.span(), 4);
        assert!(phase.contains_week(5));
        assert!(phase.contains_week(8));
        assert!(!phase.contains_week(9));
    }

    #[test]
    fn test_warmup_type_serialization() {
        assert_eq!(serde_json::to_string(&WarmupType::Primers).unwrap(), "\"primers\"");
        assert_eq!(serde_json::to_string(&WarmupType::None).unwrap(), "\"none\"");
        assert_eq!(WarmupType::Switch.group().as_deref(), Some("warmup-switch"));
        assert_eq!(WarmupType::None.group(), None);
    }

    #[test]
    fn test_ids() {
        let id = workout_id("base", 2, 3);
        assert_eq!(id, "base-week2-day3");
        assert_eq!(exercise_id(&id, 4), "base-week2-day3-ex4");
        assert_eq!(
            warmup_exercise_id(&id, WarmupType::Primers, 1),
            "base-week2-day3-warmup-primers1"
        );
    }

    #[test]
    fn test_exercise_serializes_camel_case() {
        let exercise = Exercise {
            id: "x".into(),
            name: "Push Up".into(),
            sets: "3".into(),
            reps: "10".into(),
            tempo: String::new(),
            load: String::new(),
            rest: String::new(),
            notes: String::new(),
            video_url: None,
            superset_id: Some('A'),
            superset_order: Some(1),
            is_part_of_superset: true,
            is_warmup: false,
            warmup_type: WarmupType::None,
            warmup_group: None,
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["supersetId"], "A");
        assert_eq!(json["isPartOfSuperset"], true);
        assert_eq!(json["warmupType"], "none");
        assert_eq!(
            exercise.superset(),
            Some(SupersetTag { id: 'A', order: 1 })
        );
    }
}
