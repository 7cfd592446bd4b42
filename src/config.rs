use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, TravelError};
use crate::rollup::DEFAULT_SHORT_THRESHOLD;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[serde(rename = "ko")]
    #[value(name = "ko")]
    Korean,
    #[serde(rename = "ko-hanja")]
    #[value(name = "ko-hanja")]
    KoreanHanja,
    #[serde(rename = "zh")]
    #[value(name = "zh")]
    Chinese,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Full,
    Short,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    #[default]
    Chrono,
    /// Skip the per-year listing.
    #[serde(rename = "none")]
    Off,
}

fn default_short_threshold() -> u64 {
    DEFAULT_SHORT_THRESHOLD
}

/// Settings file contents. Keys match the JSON config of the travel log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// CSV travel log; relative paths resolve against the settings file.
    pub source: PathBuf,
    #[serde(default)]
    pub lang: Language,

    #[serde(default)]
    pub track_home: bool,
    #[serde(default)]
    pub home_code: String,
    #[serde(default)]
    pub home_name: String,

    #[serde(default)]
    pub track_residency: bool,
    #[serde(default)]
    pub residency_code: String,
    #[serde(default)]
    pub residency_name: String,
    #[serde(default)]
    pub residency_begin: Option<NaiveDate>,

    #[serde(default)]
    pub table_style: TableStyle,
    #[serde(default)]
    pub report_style: ReportStyle,
    #[serde(default = "default_short_threshold")]
    pub short_threshold: u64,
}

impl Settings {
    pub fn from_json(content: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!(action = "load", component = "settings", file_path = ?path, "Loading settings");
        let content = fs::read_to_string(path).map_err(|source| TravelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_json(&content)?;

        if settings.source.is_relative() {
            if let Some(dir) = path.parent() {
                settings.source = dir.join(&settings.source);
            }
        }

        info!(action = "loaded", component = "settings", source = ?settings.source, lang = ?settings.lang, "Settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.track_home && self.home_code.trim().is_empty() {
            return Err(TravelError::Config(
                "track_home is enabled but home_code is empty".to_string(),
            ));
        }
        if self.track_residency && self.residency_begin.is_none() {
            return Err(TravelError::Config(
                "track_residency is enabled but residency_begin is missing".to_string(),
            ));
        }
        Ok(())
    }

    /// Name shown for the home country, falling back to its code.
    pub fn home_label(&self) -> &str {
        if self.home_name.is_empty() {
            &self.home_code
        } else {
            &self.home_name
        }
    }

    pub fn residency_label(&self) -> &str {
        if self.residency_name.is_empty() {
            &self.residency_code
        } else {
            &self.residency_name
        }
    }
}
