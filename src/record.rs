use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, TravelError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One line of the travel log: the date a country was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub date: NaiveDate,
    pub country: String,
}

impl VisitRecord {
    pub fn new(date: NaiveDate, country: impl Into<String>) -> Self {
        Self {
            date,
            country: country.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "DATE")]
    date: String,
    #[serde(rename = "ENTERED")]
    entered: String,
}

/// Reads `DATE,ENTERED` rows in file order. Ordering is checked later by the builder.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<VisitRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();
    for row in csv_reader.records() {
        // Rows with the wrong field count fail here, before deserializing.
        let row = row.map_err(|e| {
            let line = e.position().map(|pos| pos.line());
            match line {
                Some(line) => TravelError::MalformedRecord {
                    line,
                    reason: e.to_string(),
                },
                None => TravelError::Csv(e),
            }
        })?;
        let line = row.position().map_or(0, |pos| pos.line());
        let raw: RawRecord =
            row.deserialize(Some(&headers))
                .map_err(|e| TravelError::MalformedRecord {
                    line,
                    reason: e.to_string(),
                })?;

        let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|e| {
            TravelError::MalformedRecord {
                line,
                reason: format!("invalid date '{}': {}", raw.date, e),
            }
        })?;
        if raw.entered.is_empty() {
            return Err(TravelError::MalformedRecord {
                line,
                reason: "missing country code".to_string(),
            });
        }

        records.push(VisitRecord::new(date, raw.entered));
    }

    Ok(records)
}

pub fn load_records(path: &Path) -> Result<Vec<VisitRecord>> {
    info!(action = "load", component = "record_source", file_path = ?path, "Reading travel log");
    let file = File::open(path).map_err(|source| TravelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(file)?;
    info!(action = "loaded", component = "record_source", record_count = records.len(), "Travel log read");
    Ok(records)
}
