use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::{Result, TravelError};
use crate::record::VisitRecord;

/// Accumulated stay data for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryStats {
    pub total_days: u64,
    pub first_visit: NaiveDate,
    pub last_visit: NaiveDate,
}

/// Year -> countries present in that year, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearVisitIndex {
    years: BTreeMap<i32, IndexSet<String>>,
}

/// A country as listed under a year of the chronological report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCountry<'a> {
    pub code: &'a str,
    /// No earlier year lists this country.
    pub first_time: bool,
}

impl YearVisitIndex {
    fn insert(&mut self, year: i32, country: &str) {
        let countries = self.years.entry(year).or_default();
        if !countries.contains(country) {
            countries.insert(country.to_string());
        }
    }

    pub fn get(&self, year: i32) -> Option<&IndexSet<String>> {
        self.years.get(&year)
    }

    /// Walks years ascending, flagging each country the first year it shows up.
    pub fn chronological(&self) -> Vec<(i32, Vec<YearCountry<'_>>)> {
        let mut seen: IndexSet<&str> = IndexSet::new();
        self.years
            .iter()
            .map(|(year, countries)| {
                let listed = countries
                    .iter()
                    .map(|code| YearCountry {
                        code,
                        first_time: seen.insert(code.as_str()),
                    })
                    .collect();
                (*year, listed)
            })
            .collect()
    }
}

/// Per-country totals and the year index, built once from the travel log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitHistory {
    countries: IndexMap<String, CountryStats>,
    years: YearVisitIndex,
}

impl VisitHistory {
    /// Each record's stay lasts until the next record's date, and the last
    /// one until `today`.
    ///
    /// # Errors
    /// `EmptyInput` for no records, `NonMonotonic` when a departure precedes
    /// its entry (unsorted input, or a last record dated after `today`).
    pub fn build(records: &[VisitRecord], today: NaiveDate) -> Result<Self> {
        if records.is_empty() {
            return Err(TravelError::EmptyInput);
        }

        let mut countries: IndexMap<String, CountryStats> = IndexMap::new();
        let mut years = YearVisitIndex::default();

        for (index, record) in records.iter().enumerate() {
            let entry = record.date;
            let departure = records.get(index + 1).map_or(today, |next| next.date);

            let interval = departure.signed_duration_since(entry).num_days();
            let days = u64::try_from(interval).map_err(|_| TravelError::NonMonotonic {
                index,
                country: record.country.clone(),
                entry,
                departure,
            })?;

            countries
                .entry(record.country.clone())
                .and_modify(|stats| {
                    stats.total_days += days;
                    stats.last_visit = departure;
                })
                .or_insert(CountryStats {
                    total_days: days,
                    first_visit: entry,
                    last_visit: departure,
                });

            // Only the two end years are recorded, even for multi-year stays.
            years.insert(entry.year(), &record.country);
            years.insert(departure.year(), &record.country);
        }

        debug!(
            action = "build",
            component = "visit_history",
            record_count = records.len(),
            country_count = countries.len(),
            year_count = years.years.len(),
            "Visit history built"
        );

        Ok(Self { countries, years })
    }

    /// Countries in order of first appearance.
    pub fn countries(&self) -> &IndexMap<String, CountryStats> {
        &self.countries
    }

    pub fn get(&self, code: &str) -> Option<&CountryStats> {
        self.countries.get(code)
    }

    pub fn years(&self) -> &YearVisitIndex {
        &self.years
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn total_days(&self) -> u64 {
        self.countries.values().map(|stats| stats.total_days).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, country: &str) -> VisitRecord {
        VisitRecord::new(date(y, m, d), country)
    }

    fn sample() -> Vec<VisitRecord> {
        vec![
            record(2020, 1, 1, "A"),
            record(2020, 6, 1, "B"),
            record(2020, 12, 1, "A"),
        ]
    }

    #[test]
    fn accumulates_stays_until_next_entry_and_today() {
        let history = VisitHistory::build(&sample(), date(2021, 1, 1)).unwrap();

        let a = history.get("A").unwrap();
        assert_eq!(a.total_days, 152 + 31);
        assert_eq!(a.first_visit, date(2020, 1, 1));
        assert_eq!(a.last_visit, date(2021, 1, 1));

        let b = history.get("B").unwrap();
        assert_eq!(b.total_days, 183);
        assert_eq!(b.first_visit, date(2020, 6, 1));
        assert_eq!(b.last_visit, date(2020, 12, 1));

        assert_eq!(history.total_days(), 366);
        assert_eq!(history.country_count(), 2);
    }

    #[test]
    fn first_visit_never_after_last_visit() {
        let history = VisitHistory::build(&sample(), date(2021, 1, 1)).unwrap();
        for stats in history.countries().values() {
            assert!(stats.first_visit <= stats.last_visit);
        }
    }

    #[test]
    fn stay_across_new_year_lists_both_years_once_counted() {
        let records = vec![record(2019, 12, 20, "A"), record(2020, 1, 10, "B")];
        let history = VisitHistory::build(&records, date(2020, 1, 15)).unwrap();

        assert_eq!(history.get("A").unwrap().total_days, 21);
        let y2019: Vec<_> = history.years().get(2019).unwrap().iter().collect();
        let y2020: Vec<_> = history.years().get(2020).unwrap().iter().collect();
        assert_eq!(y2019, vec!["A"]);
        assert_eq!(y2020, vec!["A", "B"]);
    }

    #[test]
    fn multi_year_stay_skips_years_in_between() {
        let records = vec![record(2019, 1, 1, "A"), record(2022, 1, 1, "B")];
        let history = VisitHistory::build(&records, date(2022, 2, 1)).unwrap();

        let years: Vec<i32> = history
            .years()
            .chronological()
            .into_iter()
            .map(|(year, _)| year)
            .collect();
        assert_eq!(years, vec![2019, 2022]);
        assert!(history.years().get(2020).is_none());
        assert!(history.years().get(2021).is_none());
    }

    #[test]
    fn year_lists_keep_first_encounter_order_without_duplicates() {
        let records = vec![
            record(2020, 1, 1, "KR"),
            record(2020, 2, 1, "JP"),
            record(2020, 3, 1, "KR"),
            record(2020, 4, 1, "US"),
        ];
        let history = VisitHistory::build(&records, date(2020, 5, 1)).unwrap();

        let y2020: Vec<_> = history.years().get(2020).unwrap().iter().collect();
        assert_eq!(y2020, vec!["KR", "JP", "US"]);
    }

    #[test]
    fn same_day_entries_give_zero_day_interval() {
        let records = vec![record(2020, 1, 1, "A"), record(2020, 1, 1, "B")];
        let history = VisitHistory::build(&records, date(2020, 1, 11)).unwrap();

        assert_eq!(history.get("A").unwrap().total_days, 0);
        assert_eq!(history.get("B").unwrap().total_days, 10);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            VisitHistory::build(&[], date(2020, 1, 1)),
            Err(TravelError::EmptyInput)
        ));
    }

    #[test]
    fn unsorted_records_are_rejected() {
        let records = vec![record(2020, 6, 1, "A"), record(2020, 1, 1, "B")];
        match VisitHistory::build(&records, date(2021, 1, 1)) {
            Err(TravelError::NonMonotonic {
                index,
                country,
                entry,
                departure,
            }) => {
                assert_eq!(index, 0);
                assert_eq!(country, "A");
                assert_eq!(entry, date(2020, 6, 1));
                assert_eq!(departure, date(2020, 1, 1));
            }
            other => panic!("expected NonMonotonic, got {other:?}"),
        }
    }

    #[test]
    fn last_record_after_today_is_rejected() {
        let records = vec![record(2020, 6, 1, "A")];
        assert!(matches!(
            VisitHistory::build(&records, date(2020, 5, 1)),
            Err(TravelError::NonMonotonic { index: 0, .. })
        ));
    }

    #[test]
    fn building_twice_is_identical() {
        let today = date(2021, 1, 1);
        let first = VisitHistory::build(&sample(), today).unwrap();
        let second = VisitHistory::build(&sample(), today).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn chronological_flags_first_appearance() {
        let records = vec![
            record(2019, 3, 1, "KR"),
            record(2019, 5, 1, "JP"),
            record(2020, 2, 1, "KR"),
            record(2020, 3, 1, "TW"),
        ];
        let history = VisitHistory::build(&records, date(2020, 4, 1)).unwrap();
        let walk = history.years().chronological();

        assert_eq!(walk.len(), 2);
        assert_eq!(walk[0].0, 2019);
        assert!(walk[0].1.iter().all(|c| c.first_time));

        let (year, listed) = &walk[1];
        assert_eq!(*year, 2020);
        let flags: Vec<(&str, bool)> = listed.iter().map(|c| (c.code, c.first_time)).collect();
        assert_eq!(flags, vec![("JP", false), ("KR", false), ("TW", true)]);
    }
}
