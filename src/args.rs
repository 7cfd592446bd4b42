use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{Language, Settings, TableStyle, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "travel-day-counter",
    about = "Count the days spent in each country from a chronological travel log",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the JSON settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Travel log CSV, overriding the settings file
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Display language, overriding the settings file
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Table style, overriding the settings file
    #[arg(long, value_enum)]
    pub table_style: Option<TableStyle>,

    /// Minimum days for a country to get its own row in the short table
    #[arg(long)]
    pub threshold: Option<u64>,

    /// Date to count open stays up to (yyyy-mm-dd), defaults to today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Do not embolden first-time countries in the chronological report
    #[arg(long)]
    pub no_bold: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(source) = &self.source {
            settings.source = source.clone();
        }
        if let Some(lang) = self.lang {
            settings.lang = lang;
        }
        if let Some(style) = self.table_style {
            settings.table_style = style;
        }
        if let Some(threshold) = self.threshold {
            settings.short_threshold = threshold;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.threshold == Some(0) {
            anyhow::bail!("--threshold must be greater than 0");
        }
        Ok(())
    }
}
