pub mod analysis;
pub mod args;
pub mod config;
pub mod error;
pub mod history;
pub mod locale;
pub mod record;
pub mod report;
pub mod rollup;
pub mod stats;
pub mod utils;

pub use analysis::{analyze_travel_history, TravelReport};
pub use args::Args;
pub use config::Settings;
pub use error::{Result, TravelError};
pub use history::{CountryStats, VisitHistory, YearVisitIndex};
pub use record::VisitRecord;
pub use report::print_report;
