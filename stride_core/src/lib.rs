#![forbid(unsafe_code)]

//! Core domain model and sheet import logic for the Stride training plan.
//!
//! This crate provides:
//! - Domain types (rows, phases, workouts, exercises)
//! - Row classification, superset and warmup tagging
//! - Phase-scoped week resolution
//! - Workout assembly from exported sheet rows
//! - Fallback plan generation
//! - CSV ingest, format detection and dated history columns
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod patterns;
pub mod classify;
pub mod tagger;
pub mod week;
pub mod assemble;
pub mod fallback;
pub mod phases;
pub mod sheet;
pub mod history;
pub mod sheet_url;
pub mod import;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use assemble::assemble;
pub use fallback::generate_fallback;
pub use phases::{default_phases, group_weeks_into_blocks, WeekBlock};
pub use sheet::{read_sheet, SheetFormat, SheetTable};
pub use sheet_url::published_csv_url;
pub use import::{import_plan, FallbackReason, ImportedPlan, PlanSource};
