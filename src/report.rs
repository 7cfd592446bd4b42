use std::io::{self, Write};

use crate::analysis::TravelReport;
use crate::config::{ReportStyle, Settings};
use crate::history::CountryStats;
use crate::locale::{locale_for, Locale};
use crate::stats;
use crate::utils::{bold, format_percent};

/// Renders a computed report as text. Performs no computation of its own.
pub struct ReportWriter<'a> {
    settings: &'a Settings,
    locale: Box<dyn Locale>,
    emphasize_new: bool,
}

impl<'a> ReportWriter<'a> {
    pub fn new(settings: &'a Settings, emphasize_new: bool) -> Self {
        Self {
            settings,
            locale: locale_for(settings.lang),
            emphasize_new,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, report: &TravelReport) -> io::Result<()> {
        self.write_header(out, report)?;
        if self.settings.track_home {
            self.write_home_split(out, report)?;
        }
        if self.settings.track_residency {
            self.write_residency(out, report)?;
        }
        self.write_table(out, report)?;
        if self.settings.report_style == ReportStyle::Chrono {
            self.write_chronological(out, report)?;
        }
        Ok(())
    }

    fn write_header<W: Write>(&self, out: &mut W, report: &TravelReport) -> io::Result<()> {
        writeln!(out, "{}", self.locale.title())?;
        writeln!(
            out,
            "{}\n",
            self.locale
                .countries_visited(report.history.country_count(), report.today)
        )
    }

    fn write_home_split<W: Write>(&self, out: &mut W, report: &TravelReport) -> io::Result<()> {
        let Some(split) = &report.home_split else {
            return Ok(());
        };
        let home = self.settings.home_label();
        writeln!(
            out,
            "{}",
            self.locale.inside(
                home,
                split.days_home,
                split.years_home(),
                &format_percent(split.home_ratio())
            )
        )?;
        writeln!(
            out,
            "{}",
            self.locale.outside(
                home,
                split.days_abroad,
                split.years_abroad(),
                &format_percent(split.abroad_ratio())
            )
        )?;
        if !split.home_visited {
            writeln!(out, "{}", self.locale.home_absent(home))?;
        }
        Ok(())
    }

    fn write_residency<W: Write>(&self, out: &mut W, report: &TravelReport) -> io::Result<()> {
        let Some(period) = &report.residency else {
            return Ok(());
        };
        writeln!(
            out,
            "{}\n",
            self.locale.residency(
                self.settings.residency_label(),
                period.whole_years(),
                period.remaining_days()
            )
        )
    }

    fn write_table<W: Write>(&self, out: &mut W, report: &TravelReport) -> io::Result<()> {
        writeln!(out, "{}", self.locale.table_header().join("\t"))?;

        match &report.shortened {
            Some(short) => {
                for row in &short.kept {
                    if let Some(stats) = report.history.get(&row.code) {
                        self.write_row(out, report, &row.code, stats)?;
                    }
                }
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    self.locale.other(),
                    short.other_days,
                    format_percent(short.other_ratio)
                )
            }
            None => {
                for (code, stats) in stats::by_days_descending(&report.history) {
                    self.write_row(out, report, code, stats)?;
                }
                Ok(())
            }
        }
    }

    fn write_row<W: Write>(
        &self,
        out: &mut W,
        report: &TravelReport,
        code: &str,
        stats: &CountryStats,
    ) -> io::Result<()> {
        let percent = report.percent.get(code).map(format_percent).unwrap_or_default();
        let rank = report
            .ranks
            .get(code)
            .map(|rank| self.locale.rank(rank))
            .unwrap_or_default();
        writeln!(
            out,
            "{code}\t{}\t{percent}\t{rank}\t{}\t{}",
            stats.total_days, stats.first_visit, stats.last_visit
        )
    }

    fn write_chronological<W: Write>(
        &self,
        out: &mut W,
        report: &TravelReport,
    ) -> io::Result<()> {
        writeln!(out, "\n{}", self.locale.chronological_title())?;
        for (year, countries) in report.history.years().chronological() {
            let listed: Vec<String> = countries
                .iter()
                .map(|country| {
                    if country.first_time && self.emphasize_new {
                        bold(country.code)
                    } else {
                        country.code.to_string()
                    }
                })
                .collect();
            writeln!(out, "[{year:04}] {}", listed.join(" "))?;
        }
        Ok(())
    }
}

pub fn print_report(report: &TravelReport, settings: &Settings, emphasize_new: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ReportWriter::new(settings, emphasize_new).write(&mut out, report)
}
