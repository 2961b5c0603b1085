//! Report configuration
//!
//! Everything is optional: a missing file or missing section falls back to the
//! layout of the standard complaint and group exports.

pub mod layout;
pub mod regions;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use layout::{ComplaintColumns, ComplaintLayout, FilterRules, GroupLayout};
pub use regions::RegionLookup;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "reklamation.toml";

/// Date parsing options of the month filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthFilterConfig {
    /// Explicit formats tried, in order, when the generic parser recognizes
    /// fewer than half of the dates
    pub fallback_formats: Vec<String>,
}

impl Default for MonthFilterConfig {
    fn default() -> Self {
        MonthFilterConfig {
            fallback_formats: vec![
                "%d.%m.%Y %H:%M:%S".to_string(),
                "%d.%m.%Y %H:%M".to_string(),
                "%d.%m.%Y".to_string(),
                "%d/%m/%Y %H:%M:%S".to_string(),
                "%d/%m/%Y".to_string(),
            ],
        }
    }
}

/// Date normalization of the timestamp columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateNormalizeConfig {
    pub format: String,
}

impl Default for DateNormalizeConfig {
    fn default() -> Self {
        DateNormalizeConfig {
            format: "%d.%m.%Y %H:%M:%S".to_string(),
        }
    }
}

/// Where the region reference table comes from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionsConfig {
    /// TOML file with `[[region]]` records; the built-in table when unset
    pub path: Option<PathBuf>,
}

impl RegionsConfig {
    pub fn load_lookup(&self) -> Result<RegionLookup> {
        match &self.path {
            Some(path) => RegionLookup::load(path),
            None => RegionLookup::builtin(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub complaints: ComplaintLayout,
    pub group: GroupLayout,
    pub month_filter: MonthFilterConfig,
    pub dates: DateNormalizeConfig,
    pub regions: RegionsConfig,
}

impl Config {
    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Region file paths are relative to the config file
        if let Some(regions_path) = &config.regions.path {
            if regions_path.is_relative() {
                if let Some(dir) = path.parent() {
                    config.regions.path = Some(dir.join(regions_path));
                }
            }
        }

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the explicit config, else `reklamation.toml` if present, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load(default_path)
        } else {
            log::debug!("No config file found, using built-in layout");
            Ok(Config::default())
        }
    }
}
