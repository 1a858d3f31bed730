//! Plan import: exported sheet CSV in, workouts for one phase out.
//!
//! This is the layer that decides when to substitute fallback workouts. The
//! assembler itself only ever reports what the sheet contains.

use crate::assemble::assemble;
use crate::fallback::generate_fallback;
use crate::history::{extract_history, SheetHistory};
use crate::sheet::{detect_format, read_sheet, SheetFormat};
use crate::{Config, Result, Workout};
use serde::Serialize;

/// Why fallback workouts were used instead of the sheet
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The CSV could not be read
    Unreadable(String),
    /// The sheet was readable but contained no workouts
    NoWorkouts,
}

/// Where the workouts of an import came from
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanSource {
    Sheet,
    Fallback(FallbackReason),
}

/// Result of importing one phase of a plan
#[derive(Clone, Debug, Serialize)]
pub struct ImportedPlan {
    pub phase: String,
    pub source: PlanSource,
    pub format: Option<SheetFormat>,
    pub workouts: Vec<Workout>,
    pub history: SheetHistory,
}

impl ImportedPlan {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PlanSource::Fallback(_))
    }

    pub fn exercise_count(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }
}

/// Import the workouts of `phase_id` from the raw bytes of an exported sheet
///
/// Only an unknown phase is an error. Unreadable or empty sheets fall back to
/// generated workouts, recorded in [`ImportedPlan::source`].
pub fn import_plan(csv: &[u8], phase_id: &str, config: &Config) -> Result<ImportedPlan> {
    let phase = config.phase(phase_id)?;

    let table = match read_sheet(csv, config.sheet.has_headers) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("Could not read sheet: {}. Using fallback workouts.", e);
            return Ok(ImportedPlan {
                phase: phase.id.clone(),
                source: PlanSource::Fallback(FallbackReason::Unreadable(e.to_string())),
                format: None,
                workouts: generate_fallback(phase),
                history: SheetHistory::new(),
            });
        }
    };

    let format = detect_format(&table.headers);
    tracing::info!("Detected spreadsheet format: {:?}", format);

    let workouts = assemble(&table.rows, phase, &config.parser);
    let history = extract_history(&table);

    if workouts.is_empty() {
        tracing::warn!(
            "No workouts found for phase '{}'. Using fallback workouts.",
            phase.id
        );
        return Ok(ImportedPlan {
            phase: phase.id.clone(),
            source: PlanSource::Fallback(FallbackReason::NoWorkouts),
            format: Some(format),
            workouts: generate_fallback(phase),
            history,
        });
    }

    Ok(ImportedPlan {
        phase: phase.id.clone(),
        source: PlanSource::Sheet,
        format: Some(format),
        workouts,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SHEET: &str = "\
Code,Exercise,Sets,Reps,Tempo,Load,Rest,Notes
Week 2,,,,,,,
Day 1,Upper Focus,,,,,,
Primers,,,,,,,
1.,Cat-Cow,1,10,,,,
A1,Push Up,3,10,2-0-1,BW,60s,https://youtu.be/IODxDxX7oi4
A2,Row,3,10,2-0-1,Light,60s,
Day 2,Lower Focus,,,,,,
A1,Squat,4,6,3-0-1,80kg,90s,
";

    #[test]
    fn test_import_sheet() {
        let plan = import_plan(SHEET.as_bytes(), "build", &Config::default()).unwrap();

        assert_eq!(plan.source, PlanSource::Sheet);
        assert!(!plan.is_fallback());
        assert_eq!(plan.format, Some(SheetFormat::Custom));
        assert_eq!(plan.workouts.len(), 2);
        assert_eq!(plan.exercise_count(), 4);

        let day1 = &plan.workouts[0];
        assert_eq!(day1.id, "build-week6-day1");
        assert_eq!(day1.phase, "build");
        assert!(day1.exercises[0].is_warmup);
        assert_eq!(
            day1.exercises[1].video_url.as_deref(),
            Some("https://youtu.be/IODxDxX7oi4")
        );
    }

    #[test]
    fn test_too_few_rows_falls_back() {
        let csv = b"Code,Exercise\nDay 1,Upper\nA1,Push Up\n";
        let plan = import_plan(csv, "base", &Config::default()).unwrap();

        assert_eq!(plan.source, PlanSource::Fallback(FallbackReason::NoWorkouts));
        assert!(!plan.workouts.is_empty());
        assert!(plan.workouts.iter().all(|w| w.week >= 1 && w.week <= 4));
    }

    #[test]
    fn test_unreadable_csv_falls_back() {
        let csv = b"Code,Exercise\nDay 1,Upper\nA1,Push \xFF\xFE\nA2,Row\n";
        let plan = import_plan(csv, "peak", &Config::default()).unwrap();

        assert!(matches!(
            plan.source,
            PlanSource::Fallback(FallbackReason::Unreadable(_))
        ));
        assert_eq!(plan.format, None);
        assert!(plan.workouts.iter().all(|w| w.phase == "peak"));
    }

    #[test]
    fn test_unknown_phase_is_an_error() {
        let result = import_plan(SHEET.as_bytes(), "offseason", &Config::default());
        assert!(matches!(result, Err(Error::UnknownPhase(id)) if id == "offseason"));
    }

    #[test]
    fn test_plan_serializes_for_ui() {
        let plan = import_plan(SHEET.as_bytes(), "base", &Config::default()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["source"]["kind"], "sheet");
        assert_eq!(json["workouts"][0]["dayNumber"], 1);
        assert_eq!(json["workouts"][0]["exercises"][1]["supersetId"], "A");
    }
}
