//! Built-in training phases and week grouping.
//!
//! The default plan is a sixteen week marathon build split into four
//! four-week phases, each published as its own tab of the plan sheet.

use crate::types::PhaseInfo;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cached default phase table
static DEFAULT_PHASES: Lazy<Vec<PhaseInfo>> = Lazy::new(build_default_phases);

/// Owned copy of the default phase table
pub fn default_phases() -> Vec<PhaseInfo> {
    DEFAULT_PHASES.clone()
}

/// Look up one of the built-in phases
pub fn default_phase(id: &str) -> Option<&'static PhaseInfo> {
    DEFAULT_PHASES.iter().find(|p| p.id == id)
}

fn build_default_phases() -> Vec<PhaseInfo> {
    vec![
        phase(
            "base",
            "Base Phase (Weeks 1-4)",
            "Foundation phase focusing on building basic strength and form",
            "1194353959",
            1,
            4,
        ),
        phase(
            "build",
            "Build Phase (Weeks 5-8)",
            "Progressive overload phase with increased intensity",
            "278447527",
            5,
            8,
        ),
        phase(
            "peak",
            "Peak Phase (Weeks 9-12)",
            "Race preparation with peak performance workouts",
            "1344676238",
            9,
            12,
        ),
        phase(
            "taper",
            "Taper Phase (Weeks 13-16)",
            "Pre-race tapering to maximize race day performance",
            "0",
            13,
            16,
        ),
    ]
}

fn phase(
    id: &str,
    name: &str,
    description: &str,
    gid: &str,
    week_start: u32,
    week_end: u32,
) -> PhaseInfo {
    PhaseInfo {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        gid: Some(gid.into()),
        week_start,
        week_end,
    }
}

// ============================================================================
// Week Blocks
// ============================================================================

/// A display group of weeks
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WeekBlock {
    pub id: u32,
    pub label: String,
    pub weeks: Vec<u32>,
}

/// Block id and label for a week, regardless of the phase it came from
pub fn week_block(week: u32) -> (u32, String) {
    match week {
        1..=4 => (1, "Weeks 1-4".into()),
        5..=8 => (2, "Weeks 5-8".into()),
        9..=12 => (3, "Weeks 9-12".into()),
        13..=16 => (4, "Weeks 13-16".into()),
        other => (5, format!("Week {}", other)),
    }
}

/// Group weeks into sorted, de-duplicated blocks ordered by block id
pub fn group_weeks_into_blocks(weeks: impl IntoIterator<Item = u32>) -> Vec<WeekBlock> {
    let mut blocks: BTreeMap<u32, WeekBlock> = BTreeMap::new();

    for week in weeks {
        let (id, label) = week_block(week);
        let block = blocks.entry(id).or_insert_with(|| WeekBlock {
            id,
            label,
            weeks: Vec::new(),
        });
        if !block.weeks.contains(&week) {
            block.weeks.push(week);
        }
    }

    blocks
        .into_values()
        .map(|mut block| {
            block.weeks.sort_unstable();
            block
        })
        .collect()
}
