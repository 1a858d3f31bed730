//! Phase-scoped week resolution.
//!
//! Week numbers come from one of two places:
//! - An explicit `Week N` marker in the sheet, relative to the phase start
//! - A positional estimate from the row index, for legacy sheets without
//!   markers
//!
//! Whatever the source, the result is wrapped back into the phase's range.

use crate::config::PositionalWeekConfig;
use crate::types::PhaseInfo;

/// Weeks in the rolling window used to wrap out-of-range week numbers
pub const WEEKS_PER_PHASE_WINDOW: u32 = 4;

/// Row-index based week estimate for sheets without `Week N` markers
///
/// Kept separate from the explicit-marker path so it can be tuned or turned
/// off through configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionalWeekEstimate {
    rows_per_week: Option<usize>,
}

impl PositionalWeekEstimate {
    pub fn new(rows_per_week: usize) -> Self {
        Self {
            rows_per_week: (rows_per_week > 0).then_some(rows_per_week),
        }
    }

    pub fn disabled() -> Self {
        Self {
            rows_per_week: None,
        }
    }

    /// Weeks elapsed since the phase start at `row_index`
    pub fn offset(&self, row_index: usize) -> i64 {
        match self.rows_per_week {
            Some(rows) => (row_index / rows) as i64,
            None => 0,
        }
    }
}

impl From<&PositionalWeekConfig> for PositionalWeekEstimate {
    fn from(config: &PositionalWeekConfig) -> Self {
        if config.enabled {
            Self::new(config.rows_per_week)
        } else {
            Self::disabled()
        }
    }
}

/// Resolves week numbers for one phase
#[derive(Clone, Debug)]
pub struct WeekResolver<'a> {
    phase: &'a PhaseInfo,
    estimate: PositionalWeekEstimate,
}

impl<'a> WeekResolver<'a> {
    pub fn new(phase: &'a PhaseInfo, estimate: PositionalWeekEstimate) -> Self {
        Self { phase, estimate }
    }

    /// Absolute week for a workout starting at `row_index`
    ///
    /// `explicit` is the raw number from the last `Week N` marker, if any.
    pub fn resolve(&self, explicit: Option<u32>, row_index: usize) -> u32 {
        let week = match explicit {
            Some(raw) => self.from_marker(raw),
            None => self.from_position(row_index),
        };
        self.wrap(week)
    }

    fn from_marker(&self, raw: u32) -> i64 {
        i64::from(self.phase.week_start) + i64::from(raw) - 1
    }

    fn from_position(&self, row_index: usize) -> i64 {
        i64::from(self.phase.week_start) + self.estimate.offset(row_index)
    }

    /// Fold a week number into `[week_start, week_end]`
    fn wrap(&self, week: i64) -> u32 {
        let start = i64::from(self.phase.week_start);
        let end = i64::from(self.phase.week_end);
        if (start..=end).contains(&week) {
            return week as u32;
        }

        let window = i64::from(WEEKS_PER_PHASE_WINDOW.min(self.phase.span()));
        let wrapped = start + (week - 1).rem_euclid(window);
        tracing::debug!(
            "Week {} outside phase '{}' ({}-{}), wrapped to {}",
            week,
            self.phase.id,
            start,
            end,
            wrapped
        );
        wrapped as u32
    }
}
