//! Configuration file support for Stride.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/stride/config.toml`.

use crate::phases::default_phases;
use crate::{Error, PhaseInfo, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub sheet: SheetConfig,

    #[serde(default = "default_phases")]
    pub phases: Vec<PhaseInfo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            sheet: SheetConfig::default(),
            phases: default_phases(),
        }
    }
}

/// Workout assembler parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Sheets with fewer non-blank rows than this yield no workouts
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,

    #[serde(default)]
    pub positional_week: PositionalWeekConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_rows: default_min_rows(),
            positional_week: PositionalWeekConfig::default(),
        }
    }
}

/// Row-count week estimate used when a sheet has no `Week N` markers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PositionalWeekConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_rows_per_week")]
    pub rows_per_week: usize,
}

impl Default for PositionalWeekConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rows_per_week: default_rows_per_week(),
        }
    }
}

/// Sheet source configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SheetConfig {
    /// First CSV record is a header row
    #[serde(default = "default_true")]
    pub has_headers: bool,

    #[serde(default = "default_phase_id")]
    pub default_phase: String,

    /// Published Google Sheet holding the plan
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            has_headers: true,
            default_phase: default_phase_id(),
            url: None,
        }
    }
}

// Default value functions
fn default_min_rows() -> usize {
    3
}

fn default_rows_per_week() -> usize {
    50
}

fn default_true() -> bool {
    true
}

fn default_phase_id() -> String {
    "base".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("stride").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check the phase table and parser settings for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.phases.is_empty() {
            return Err(Error::Config("at least one phase is required".into()));
        }

        let mut seen = HashSet::new();
        for phase in &self.phases {
            if !seen.insert(phase.id.as_str()) {
                return Err(Error::Config(format!("duplicate phase id '{}'", phase.id)));
            }
            if phase.week_start < 1 {
                return Err(Error::Config(format!(
                    "phase '{}' must start at week 1 or later",
                    phase.id
                )));
            }
            if phase.week_end < phase.week_start {
                return Err(Error::Config(format!(
                    "phase '{}' ends (week {}) before it starts (week {})",
                    phase.id, phase.week_end, phase.week_start
                )));
            }
        }

        let positional = &self.parser.positional_week;
        if positional.enabled && positional.rows_per_week == 0 {
            return Err(Error::Config(
                "parser.positional_week.rows_per_week must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Look up a phase by id
    pub fn phase(&self, id: &str) -> Result<&PhaseInfo> {
        self.phases
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::UnknownPhase(id.to_string()))
    }
}
