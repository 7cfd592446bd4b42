use std::time::Instant;

use chrono::NaiveDate;
use tracing::info;

use crate::config::{Settings, TableStyle};
use crate::error::Result;
use crate::history::VisitHistory;
use crate::record::{self, VisitRecord};
use crate::rollup::{HomeAbroadSplit, ResidencyPeriod, ShortenedTable};
use crate::stats::{self, PercentTable, RankTable};

/// Everything the report needs, computed once against a single `today`.
#[derive(Debug, Clone)]
pub struct TravelReport {
    pub today: NaiveDate,
    pub history: VisitHistory,
    pub percent: PercentTable,
    pub ranks: RankTable,
    pub home_split: Option<HomeAbroadSplit>,
    pub residency: Option<ResidencyPeriod>,
    pub shortened: Option<ShortenedTable>,
}

impl TravelReport {
    pub fn from_records(
        records: &[VisitRecord],
        settings: &Settings,
        today: NaiveDate,
    ) -> Result<Self> {
        let history = VisitHistory::build(records, today)?;
        let percent = stats::percentages(&history)?;
        let ranks = stats::ranks(&history);

        let home_split = settings
            .track_home
            .then(|| HomeAbroadSplit::compute(&history, &settings.home_code));

        let residency = match (settings.track_residency, settings.residency_begin) {
            (true, Some(begin)) => Some(ResidencyPeriod::since(begin, today)?),
            _ => None,
        };

        let shortened = (settings.table_style == TableStyle::Short)
            .then(|| ShortenedTable::compute(&history, &percent, settings.short_threshold));

        Ok(Self {
            today,
            history,
            percent,
            ranks,
            home_split,
            residency,
            shortened,
        })
    }
}

pub fn analyze_travel_history(settings: &Settings, today: NaiveDate) -> Result<TravelReport> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "travel_analysis", today = %today, "Starting travel history analysis");

    let records = record::load_records(&settings.source)?;

    let compute_start = Instant::now();
    let report = TravelReport::from_records(&records, settings, today)?;
    info!(
        action = "compute",
        component = "travel_analysis",
        country_count = report.history.country_count(),
        total_days = report.history.total_days(),
        duration_ms = compute_start.elapsed().as_millis(),
        "Statistics derived"
    );

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "travel_analysis",
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(report)
}
