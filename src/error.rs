use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelError {
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("No visit records found")]
    EmptyInput,

    #[error(
        "Records out of order at index {index}: {country} entered {entry} but departed {departure}"
    )]
    NonMonotonic {
        index: usize,
        country: String,
        entry: NaiveDate,
        departure: NaiveDate,
    },

    #[error("Visit history covers zero days, percentages are undefined")]
    NoRecordedDays,

    #[error("{what} {date} is after today ({today})")]
    FutureDate {
        what: &'static str,
        date: NaiveDate,
        today: NaiveDate,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TravelError>;
