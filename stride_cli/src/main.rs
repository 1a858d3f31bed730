use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Marathon strength plan importer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show info-level logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import workouts for one phase from an exported sheet CSV
    Import {
        /// CSV file exported from the plan sheet
        file: PathBuf,

        /// Training phase id (defaults to sheet.default_phase)
        #[arg(long)]
        phase: Option<String>,

        /// Print the workouts as JSON
        #[arg(long)]
        json: bool,

        /// Fail instead of substituting generated workouts
        #[arg(long)]
        no_fallback: bool,
    },

    /// List configured training phases
    Phases,

    /// Print the generated fallback plan for a phase
    Fallback {
        #[arg(long)]
        phase: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print the CSV export URL of a phase tab
    SheetUrl {
        /// Google Sheets link (defaults to sheet.url from the config)
        url: Option<String>,

        #[arg(long)]
        phase: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        stride_core::logging::init_with_level("info");
    } else {
        stride_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Import {
            file,
            phase,
            json,
            no_fallback,
        } => cmd_import(&config, &file, phase, json, no_fallback),
        Commands::Phases => cmd_phases(&config),
        Commands::Fallback { phase, json } => cmd_fallback(&config, phase, json),
        Commands::SheetUrl { url, phase } => cmd_sheet_url(&config, url, phase),
    }
}

fn phase_or_default(config: &Config, phase: Option<String>) -> String {
    phase.unwrap_or_else(|| config.sheet.default_phase.clone())
}

fn cmd_import(
    config: &Config,
    file: &Path,
    phase: Option<String>,
    json: bool,
    no_fallback: bool,
) -> Result<()> {
    let phase_id = phase_or_default(config, phase);
    let csv = std::fs::read(file)?;
    tracing::info!("Read {} bytes from {:?}", csv.len(), file);

    let plan = import_plan(&csv, &phase_id, config)?;

    if no_fallback {
        if let PlanSource::Fallback(reason) = &plan.source {
            return Err(Error::Other(format!(
                "No usable workouts in {} ({:?})",
                file.display(),
                reason
            )));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    match &plan.source {
        PlanSource::Sheet => println!(
            "✓ Imported {} workouts ({} exercises) for phase '{}'",
            plan.workouts.len(),
            plan.exercise_count(),
            plan.phase
        ),
        PlanSource::Fallback(reason) => println!(
            "! Sheet not usable ({}), showing {} generated workouts for phase '{}'",
            describe_reason(reason),
            plan.workouts.len(),
            plan.phase
        ),
    }
    if let Some(format) = plan.format {
        println!("  Sheet format: {:?}", format);
    }
    if !plan.history.is_empty() {
        println!("  History found for {} exercises", plan.history.len());
    }
    println!();

    display_workouts(&plan.workouts);
    Ok(())
}

fn cmd_phases(config: &Config) -> Result<()> {
    let blocks = group_weeks_into_blocks(
        config
            .phases
            .iter()
            .flat_map(|p| p.week_start..=p.week_end),
    );

    for phase in &config.phases {
        println!(
            "{:<8} weeks {:>2}-{:<2}  {}",
            phase.id, phase.week_start, phase.week_end, phase.name
        );
        if !phase.description.is_empty() {
            println!("         {}", phase.description);
        }
    }

    println!();
    for block in blocks {
        let weeks: Vec<String> = block.weeks.iter().map(|w| w.to_string()).collect();
        println!("Block {} ({}): {}", block.id, block.label, weeks.join(", "));
    }
    Ok(())
}

fn cmd_fallback(config: &Config, phase: Option<String>, json: bool) -> Result<()> {
    let phase_id = phase_or_default(config, phase);
    let phase = config.phase(&phase_id)?;
    let workouts = generate_fallback(phase);

    if json {
        println!("{}", serde_json::to_string_pretty(&workouts)?);
    } else {
        display_workouts(&workouts);
    }
    Ok(())
}

fn cmd_sheet_url(config: &Config, url: Option<String>, phase: Option<String>) -> Result<()> {
    let phase_id = phase_or_default(config, phase);
    let phase = config.phase(&phase_id)?;

    let url = url
        .or_else(|| config.sheet.url.clone())
        .ok_or_else(|| Error::SheetUrl("no sheet URL given or configured".into()))?;
    let gid = phase.gid.as_deref().unwrap_or("0");

    println!("{}", published_csv_url(&url, gid)?);
    Ok(())
}

fn describe_reason(reason: &FallbackReason) -> String {
    match reason {
        FallbackReason::Unreadable(e) => format!("unreadable: {}", e),
        FallbackReason::NoWorkouts => "no workouts found".into(),
    }
}

fn display_workouts(workouts: &[Workout]) {
    let mut current_week = None;

    for workout in workouts {
        if current_week != Some(workout.week) {
            current_week = Some(workout.week);
            println!("── Week {} ──────────────────────────────", workout.week);
        }

        println!("  {}  [{}]", workout.title, workout.id);
        for exercise in &workout.exercises {
            let marker = if let Some(tag) = exercise.superset() {
                format!("{}{}", tag.id, tag.order)
            } else if exercise.is_warmup {
                exercise.warmup_type.to_string()
            } else {
                "-".into()
            };

            let mut line = format!("    {:<8} {}", marker, exercise.name);
            if !exercise.sets.is_empty() || !exercise.reps.is_empty() {
                line.push_str(&format!("  {} x {}", exercise.sets, exercise.reps));
            }
            if let Some(ref url) = exercise.video_url {
                line.push_str(&format!("  ▶ {}", url));
            }
            println!("{}", line);
        }
    }
}
