use chrono::NaiveDate;
use tracing::warn;

use crate::error::{Result, TravelError};
use crate::history::VisitHistory;
use crate::stats::{self, PercentTable};

pub const DAYS_PER_YEAR: u64 = 365;
pub const DEFAULT_SHORT_THRESHOLD: u64 = 7;

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Days spent in the home country versus everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeAbroadSplit {
    pub home_code: String,
    pub days_home: u64,
    pub days_abroad: u64,
    /// False when the home country never appears in the travel log.
    pub home_visited: bool,
}

impl HomeAbroadSplit {
    pub fn compute(history: &VisitHistory, home_code: &str) -> Self {
        let home = history.get(home_code);
        if home.is_none() {
            warn!(
                action = "rollup",
                component = "home_abroad",
                home_code = home_code,
                "Home country never appears in the travel log, counting zero days home"
            );
        }

        let days_home = home.map_or(0, |stats| stats.total_days);
        let days_abroad = history
            .countries()
            .iter()
            .filter(|(code, _)| code.as_str() != home_code)
            .map(|(_, stats)| stats.total_days)
            .sum();

        Self {
            home_code: home_code.to_string(),
            days_home,
            days_abroad,
            home_visited: home.is_some(),
        }
    }

    pub fn total_days(&self) -> u64 {
        self.days_home + self.days_abroad
    }

    pub fn years_home(&self) -> f64 {
        round1(self.days_home as f64 / DAYS_PER_YEAR as f64)
    }

    pub fn years_abroad(&self) -> f64 {
        round1(self.days_abroad as f64 / DAYS_PER_YEAR as f64)
    }

    pub fn home_ratio(&self) -> f64 {
        ratio(self.days_home, self.total_days())
    }

    pub fn abroad_ratio(&self) -> f64 {
        ratio(self.days_abroad, self.total_days())
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Elapsed days since residency began. Independent of the travel log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidencyPeriod {
    pub days: u64,
}

impl ResidencyPeriod {
    /// # Errors
    /// `FutureDate` when `begin` is after `today`.
    pub fn since(begin: NaiveDate, today: NaiveDate) -> Result<Self> {
        let elapsed = today.signed_duration_since(begin).num_days();
        let days = u64::try_from(elapsed).map_err(|_| TravelError::FutureDate {
            what: "Residency start",
            date: begin,
            today,
        })?;
        Ok(Self { days })
    }

    pub fn whole_years(&self) -> u64 {
        self.days / DAYS_PER_YEAR
    }

    pub fn remaining_days(&self) -> u64 {
        self.days % DAYS_PER_YEAR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortRow {
    pub code: String,
    pub total_days: u64,
}

/// Countries at or above the threshold individually, the rest folded into one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenedTable {
    pub threshold: u64,
    /// Longest stay first.
    pub kept: Vec<ShortRow>,
    pub other_days: u64,
    pub other_ratio: f64,
}

impl ShortenedTable {
    pub fn compute(history: &VisitHistory, percent: &PercentTable, threshold: u64) -> Self {
        let mut kept = Vec::new();
        let mut other_days = 0;
        let mut other_ratio = 0.0;

        for (code, country) in stats::by_days_descending(history) {
            if country.total_days >= threshold {
                kept.push(ShortRow {
                    code: code.to_string(),
                    total_days: country.total_days,
                });
            } else {
                other_days += country.total_days;
                other_ratio += percent.get(code).unwrap_or(0.0);
            }
        }

        Self {
            threshold,
            kept,
            other_days,
            other_ratio,
        }
    }
}
