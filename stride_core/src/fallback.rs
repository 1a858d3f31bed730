//! Synthetic workouts used when a sheet yields nothing usable.
//!
//! The generated plan is deterministic and covers every week of the phase, so
//! the app always has something to show after a failed or empty import.

use crate::types::{
    exercise_id, warmup_exercise_id, workout_id, Exercise, PhaseInfo, WarmupType, Workout,
};

/// Training days generated per week
pub const FALLBACK_DAYS_PER_WEEK: usize = 4;

/// Regular (non-warmup, non-superset) exercises per day
const REGULAR_EXERCISES_PER_DAY: usize = 3;

const FALLBACK_DURATION: &str = "45-60 mins";

const BASE_FOCUS: &[(&str, &str)] = &[
    ("Upper Body Focus", "Strength and mobility for upper body"),
    ("Lower Body Focus", "Strength and stability for lower body"),
    ("Core and Mobility", "Core strengthening and full body mobility"),
    ("Recovery Run", "Easy run with technique drills"),
];

const BUILD_FOCUS: &[(&str, &str)] = &[
    ("Upper Strength + Power", "Heavier weights and power movements"),
    ("Lower Strength + Plyometrics", "Leg strength and jumping exercises"),
    ("Hill Sprints + Core", "Running hill intervals with core work"),
    ("Tempo Run + Mobility", "Sustained effort running with recovery"),
];

const PEAK_FOCUS: &[(&str, &str)] = &[
    ("Lower Strength and Conditioning", "Heavy lower body with conditioning"),
    ("Upper Strength and Conditioning", "Upper body power and endurance"),
    ("Running Intervals + Arm Pump", "Speed intervals with arm strength"),
    ("Full Body + Core", "Comprehensive full body workout"),
];

const TAPER_FOCUS: &[(&str, &str)] = &[
    ("Maintenance Strength", "Light full body maintenance"),
    ("Speed Work", "Short, fast intervals with full recovery"),
    ("Race Prep + Mobility", "Race-specific preparation"),
    ("Active Recovery", "Very light movement and stretching"),
];

const BASE_EXERCISES: &[&str] = &[
    "Squat",
    "Romanian Deadlift",
    "Bench Press",
    "Shoulder Press",
    "Row",
    "Lunge",
];

const BUILD_EXERCISES: &[&str] = &[
    "Front Squat",
    "Deadlift",
    "Incline Press",
    "Pull-up",
    "Step-up",
    "Split Squat",
];

const PEAK_EXERCISES: &[&str] = &[
    "Hang Clean",
    "Box Jump",
    "Medicine Ball Throw",
    "Kettlebell Swing",
    "Thruster",
    "Burpee",
];

const TAPER_EXERCISES: &[&str] = &[
    "Mobility Flow",
    "Dynamic Stretch",
    "Balance Work",
    "Form Drill",
    "Activation Exercise",
];

/// Fixed exercise prescription used by the generated days
#[derive(Clone, Copy)]
struct Template {
    name: &'static str,
    sets: &'static str,
    reps: &'static str,
    tempo: &'static str,
    load: &'static str,
    rest: &'static str,
    notes: &'static str,
    video: Option<&'static str>,
}

const PRIMERS: &[Template] = &[
    Template {
        name: "Cat-Cow Stretch",
        sets: "1",
        reps: "10 each direction",
        tempo: "Slow",
        load: "Bodyweight",
        rest: "0s",
        notes: "Mobilize the spine",
        video: Some("https://www.youtube.com/watch?v=kqnua4rHVVA"),
    },
    Template {
        name: "Hip Circles",
        sets: "1",
        reps: "8 each direction",
        tempo: "Controlled",
        load: "Bodyweight",
        rest: "0s",
        notes: "Loosen hip joints",
        video: None,
    },
];

const SWITCH_ONS: &[Template] = &[
    Template {
        name: "Glute Bridges",
        sets: "2",
        reps: "10",
        tempo: "2-0-1",
        load: "Bodyweight",
        rest: "15s",
        notes: "Activate glutes",
        video: Some("https://www.youtube.com/watch?v=GUgtf41plWI"),
    },
    Template {
        name: "Band Pull Aparts",
        sets: "2",
        reps: "12",
        tempo: "2-1-1",
        load: "Light band",
        rest: "15s",
        notes: "Activate upper back",
        video: None,
    },
];

const SUPERSET_A: &[Template] = &[
    Template {
        name: "Push Up",
        sets: "3",
        reps: "10-12",
        tempo: "2-0-1",
        load: "Bodyweight",
        rest: "10s",
        notes: "Maintain tight core",
        video: Some("https://www.youtube.com/watch?v=IODxDxX7oi4"),
    },
    Template {
        name: "Band Pull Apart",
        sets: "3",
        reps: "15",
        tempo: "2-1-2",
        load: "Band",
        rest: "60s",
        notes: "Squeeze shoulder blades",
        video: Some("https://www.youtube.com/watch?v=kZDAZFAs4Y0"),
    },
];

fn focus_table(phase_id: &str) -> &'static [(&'static str, &'static str)] {
    match phase_id {
        "build" => BUILD_FOCUS,
        "peak" => PEAK_FOCUS,
        "taper" => TAPER_FOCUS,
        _ => BASE_FOCUS,
    }
}

fn exercise_names(phase_id: &str) -> &'static [&'static str] {
    match phase_id {
        "build" => BUILD_EXERCISES,
        "peak" => PEAK_EXERCISES,
        "taper" => TAPER_EXERCISES,
        _ => BASE_EXERCISES,
    }
}

/// Generate the fallback plan for a phase
pub fn generate_fallback(phase: &PhaseInfo) -> Vec<Workout> {
    let focus = focus_table(&phase.id);
    let label = phase.id.to_uppercase();
    let mut workouts = Vec::new();

    for week in phase.week_start..=phase.week_end {
        for day_index in 0..FALLBACK_DAYS_PER_WEEK {
            let day_number = day_index as u32 + 1;
            let id = workout_id(&phase.id, week, day_number);
            let (title, description) = focus[day_index % focus.len()];

            workouts.push(Workout {
                title: format!("Day {}: {} - {}", day_number, label, title),
                description: format!("{} ({} PHASE)", description, label),
                phase: phase.id.clone(),
                week,
                day: format!("Day {}", day_number),
                day_number,
                duration: FALLBACK_DURATION.into(),
                exercises: fallback_exercises(&id, &phase.id, day_index),
                id,
            });
        }
    }

    tracing::info!(
        "Generated {} fallback workouts for phase '{}' (weeks {}-{})",
        workouts.len(),
        phase.id,
        phase.week_start,
        phase.week_end
    );
    workouts
}

fn fallback_exercises(workout_id: &str, phase_id: &str, day_index: usize) -> Vec<Exercise> {
    let mut exercises = Vec::new();

    for (warmup, templates) in [(WarmupType::Primers, PRIMERS), (WarmupType::Switch, SWITCH_ONS)] {
        for (i, template) in templates.iter().enumerate() {
            let id = warmup_exercise_id(workout_id, warmup, i + 1);
            exercises.push(from_template(id, template, None, warmup));
        }
    }

    for (i, template) in SUPERSET_A.iter().enumerate() {
        let id = exercise_id(workout_id, exercises.len() + 1);
        exercises.push(from_template(id, template, Some(('A', i as u32 + 1)), WarmupType::None));
    }

    let names = exercise_names(phase_id);
    for i in 0..REGULAR_EXERCISES_PER_DAY {
        let name = names[(day_index * REGULAR_EXERCISES_PER_DAY + i) % names.len()];
        let template = Template {
            name,
            sets: "3-4",
            reps: "8-12",
            tempo: "2-0-2",
            load: "Moderate",
            rest: "60-90s",
            notes: "Focus on quality movement",
            video: None,
        };
        let id = exercise_id(workout_id, exercises.len() + 1);
        exercises.push(from_template(id, &template, None, WarmupType::None));
    }

    exercises
}

fn from_template(
    id: String,
    template: &Template,
    superset: Option<(char, u32)>,
    warmup: WarmupType,
) -> Exercise {
    Exercise {
        id,
        name: template.name.into(),
        sets: template.sets.into(),
        reps: template.reps.into(),
        tempo: template.tempo.into(),
        load: template.load.into(),
        rest: template.rest.into(),
        notes: template.notes.into(),
        video_url: template.video.map(String::from),
        superset_id: superset.map(|(id, _)| id),
        superset_order: superset.map(|(_, order)| order),
        is_part_of_superset: superset.is_some(),
        is_warmup: warmup.is_warmup(),
        warmup_type: warmup,
        warmup_group: warmup.group(),
    }
}
