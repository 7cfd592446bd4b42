use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::error;

use travel_day_counter::{analyze_travel_history, print_report, utils, Args, Settings};

fn run(args: &Args) -> Result<()> {
    let mut settings = Settings::load(&args.config)
        .with_context(|| format!("Failed to load settings from {:?}", args.config))?;
    args.apply_overrides(&mut settings);

    // Read the clock once so every figure agrees on "today".
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let report = analyze_travel_history(&settings, today)
        .with_context(|| format!("Failed to analyze travel log {:?}", settings.source))?;
    print_report(&report, &settings, !args.no_bold).context("Failed to write report")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    args.validate()?;

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(action = "abort", component = "main", "{e:#}");
            std::process::exit(1);
        }
    }
}
