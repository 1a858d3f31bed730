//! Workout assembly from classified sheet rows.
//!
//! The assembler is a single pass over the rows carrying an explicit
//! [`ScanState`]:
//! - A day header closes the open workout and opens the next one
//! - Week markers move the week used by later day headers
//! - Warmup markers tag the rows that follow them
//! - Exercise rows are appended to the open workout, or dropped when none is
//!   open
//!
//! It never fabricates data: an unusable sheet yields an empty list and the
//! caller decides whether to substitute fallback workouts.

use crate::classify::{classify, is_day_header, RowKind};
use crate::config::ParserConfig;
use crate::patterns::{capture_number, DAY_NUMBER, VIDEO_URL};
use crate::tagger::{superset_tag, WarmupCarry};
use crate::types::{
    col, exercise_id, warmup_exercise_id, workout_id, Exercise, PhaseInfo, Row, WarmupType,
    Workout,
};
use crate::week::{PositionalWeekEstimate, WeekResolver};
use std::collections::HashSet;

/// Duration given to workouts read from a sheet
pub const DEFAULT_WORKOUT_DURATION: &str = "60 mins";

/// Build workouts for `phase` from sheet rows
///
/// Deterministic: identical rows always produce identical workouts.
pub fn assemble(rows: &[Row], phase: &PhaseInfo, parser: &ParserConfig) -> Vec<Workout> {
    let usable = rows.iter().filter(|r| !r.is_blank()).count();
    if usable < parser.min_rows {
        tracing::info!(
            "Only {} usable rows for phase '{}' (need {}), nothing to assemble",
            usable,
            phase.id,
            parser.min_rows
        );
        return Vec::new();
    }

    tracing::debug!("Assembling {} rows for phase '{}'", rows.len(), phase.id);

    let resolver = WeekResolver::new(
        phase,
        PositionalWeekEstimate::from(&parser.positional_week),
    );
    let mut state = ScanState::new(phase, resolver);

    for (index, row) in rows.iter().enumerate() {
        state.step(index, row);
    }

    let workouts = state.finish();
    tracing::info!(
        "Assembled {} workouts for phase '{}'",
        workouts.len(),
        phase.id
    );
    workouts
}

/// Accumulator threaded through the row scan
struct ScanState<'a> {
    phase: &'a PhaseInfo,
    resolver: WeekResolver<'a>,
    current: Option<Workout>,
    explicit_week: Option<u32>,
    warmup: WarmupCarry,
    headers_seen: u32,
    used_ids: HashSet<String>,
    workouts: Vec<Workout>,
}

impl<'a> ScanState<'a> {
    fn new(phase: &'a PhaseInfo, resolver: WeekResolver<'a>) -> Self {
        Self {
            phase,
            resolver,
            current: None,
            explicit_week: None,
            warmup: WarmupCarry::default(),
            headers_seen: 0,
            used_ids: HashSet::new(),
            workouts: Vec::new(),
        }
    }

    fn step(&mut self, index: usize, row: &Row) {
        let kind = classify(row);
        tracing::debug!("Row {}: {:?} {:?}", index, kind, row.cells());

        match kind {
            RowKind::WeekMarker(raw) => {
                tracing::debug!("Found week {} marker at row {}", raw, index);
                self.explicit_week = Some(raw);
            }
            RowKind::DayHeader => self.open_workout(index, row),
            RowKind::WarmupSectionMarker(warmup) => {
                if let Some(workout) = &self.current {
                    tracing::debug!("Found {} section for {}", warmup, workout.title);
                    self.warmup.open(warmup);
                }
            }
            RowKind::Skippable => {}
            RowKind::Exercise => self.add_exercise(index, row),
        }
    }

    fn open_workout(&mut self, index: usize, row: &Row) {
        self.close_workout();
        self.headers_seen += 1;
        self.warmup.reset();

        let code = row.cell(col::CODE).trim();
        let name = row.cell(col::NAME).trim();

        let day_number = capture_number(&DAY_NUMBER, &format!("{} {}", code, name))
            .unwrap_or(self.headers_seen);
        let week = self.resolver.resolve(self.explicit_week, index);
        let title = workout_title(code, name);
        let description = if name.is_empty() {
            title.clone()
        } else {
            name.to_string()
        };
        let id = self.unique_id(workout_id(&self.phase.id, week, day_number));

        tracing::info!("Created workout: {} (week {}, id {})", title, week, id);

        self.current = Some(Workout {
            id,
            title,
            description,
            phase: self.phase.id.clone(),
            week,
            day: format!("Day {}", day_number),
            day_number,
            duration: DEFAULT_WORKOUT_DURATION.into(),
            exercises: Vec::new(),
        });
    }

    fn add_exercise(&mut self, index: usize, row: &Row) {
        let Some(workout) = self.current.as_mut() else {
            tracing::warn!(
                "Dropping row {} ({:?}): no workout is open yet",
                index,
                row.cell(col::CODE)
            );
            return;
        };

        let code = row.cell(col::CODE);
        let name = if row.cell(col::NAME).trim().is_empty() {
            code
        } else {
            row.cell(col::NAME)
        };

        let superset = superset_tag(code);
        let warmup = self.warmup.tag(code, name);

        let id = if warmup.is_warmup() {
            let position = workout
                .exercises
                .iter()
                .filter(|e| e.warmup_type == warmup)
                .count()
                + 1;
            warmup_exercise_id(&workout.id, warmup, position)
        } else {
            exercise_id(&workout.id, workout.exercises.len() + 1)
        };

        let exercise = Exercise {
            id,
            name: name.to_string(),
            sets: row.cell(col::SETS).to_string(),
            reps: row.cell(col::REPS).to_string(),
            tempo: row.cell(col::TEMPO).to_string(),
            load: row.cell(col::LOAD).to_string(),
            rest: row.cell(col::REST).to_string(),
            notes: row.cell(col::NOTES).to_string(),
            video_url: find_video_url(row),
            superset_id: superset.map(|s| s.id),
            superset_order: superset.map(|s| s.order),
            is_part_of_superset: superset.is_some(),
            is_warmup: warmup.is_warmup(),
            warmup_type: warmup,
            warmup_group: warmup.group(),
        };

        tracing::debug!(
            "Added exercise: {} to {}{}",
            exercise.name,
            workout.title,
            if warmup == WarmupType::None {
                String::new()
            } else {
                format!(" ({} warmup)", warmup)
            }
        );
        workout.exercises.push(exercise);
    }

    fn close_workout(&mut self) {
        if let Some(workout) = self.current.take() {
            self.workouts.push(workout);
        }
    }

    /// Suffix repeated ids (`-2`, `-3`, ...) so every workout id is unique
    fn unique_id(&mut self, base: String) -> String {
        if self.used_ids.insert(base.clone()) {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.used_ids.insert(candidate.clone()) {
                tracing::warn!("Duplicate workout id {}, using {}", base, candidate);
                return candidate;
            }
            n += 1;
        }
    }

    fn finish(mut self) -> Vec<Workout> {
        self.close_workout();
        self.workouts
    }
}

/// Title for a day header row
///
/// `Day 1` + `Upper Focus` becomes `Day 1: Upper Focus`; otherwise the more
/// descriptive second column wins when present.
pub fn workout_title(code: &str, name: &str) -> String {
    let code = code.trim();
    let name = name.trim();

    if name.is_empty() {
        code.to_string()
    } else if is_day_header(code) && !is_day_header(name) {
        format!("{}: {}", code, name)
    } else {
        name.to_string()
    }
}

/// First video link found in any cell, in column order
pub fn find_video_url(row: &Row) -> Option<String> {
    row.cells()
        .iter()
        .find_map(|cell| VIDEO_URL.find(cell))
        .map(|m| m.as_str().to_string())
}
