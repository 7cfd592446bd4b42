use indexmap::IndexMap;

use crate::error::{Result, TravelError};
use crate::history::{CountryStats, VisitHistory};

/// Country -> share of all recorded days, as a ratio in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentTable(IndexMap<String, f64>);

impl PercentTable {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }
}

/// Country -> rank, 1 being the longest stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable(IndexMap<String, u32>);

impl RankTable {
    pub fn get(&self, code: &str) -> Option<u32> {
        self.0.get(code).copied()
    }
}

/// Countries by total days, longest first. Ties keep first-visit order.
pub fn by_days_descending(history: &VisitHistory) -> Vec<(&str, &CountryStats)> {
    let mut sorted: Vec<(&str, &CountryStats)> = history
        .countries()
        .iter()
        .map(|(code, stats)| (code.as_str(), stats))
        .collect();
    sorted.sort_by(|a, b| b.1.total_days.cmp(&a.1.total_days));
    sorted
}

/// # Errors
/// `NoRecordedDays` when every stay is zero days long.
pub fn percentages(history: &VisitHistory) -> Result<PercentTable> {
    let total = history.total_days();
    if total == 0 {
        return Err(TravelError::NoRecordedDays);
    }

    let table = history
        .countries()
        .iter()
        .map(|(code, stats)| (code.clone(), stats.total_days as f64 / total as f64))
        .collect();
    Ok(PercentTable(table))
}

/// Competition ranking: equal totals share a rank and the next lower total
/// skips past the whole tie group (1, 2, 2, 4).
pub fn ranks(history: &VisitHistory) -> RankTable {
    let mut table = IndexMap::new();
    let mut current_rank = 0u32;
    let mut pending_ties = 0u32;
    let mut last_days: Option<u64> = None;

    for (code, stats) in by_days_descending(history) {
        if last_days == Some(stats.total_days) {
            pending_ties += 1;
        } else {
            current_rank += pending_ties + 1;
            pending_ties = 0;
            last_days = Some(stats.total_days);
        }
        table.insert(code.to_string(), current_rank);
    }

    RankTable(table)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::record::VisitRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Builds consecutive stays of the given lengths starting 2020-01-01.
    fn history_with_stays(stays: &[(&str, i64)]) -> VisitHistory {
        let mut day = date(2020, 1, 1);
        let mut records = Vec::new();
        for (country, days) in stays {
            records.push(VisitRecord::new(day, *country));
            day += chrono::Duration::days(*days);
        }
        VisitHistory::build(&records, day).unwrap()
    }

    #[test]
    fn tied_totals_share_rank_one() {
        let records = vec![
            VisitRecord::new(date(2020, 1, 1), "A"),
            VisitRecord::new(date(2020, 6, 1), "B"),
            VisitRecord::new(date(2020, 12, 1), "A"),
        ];
        let history = VisitHistory::build(&records, date(2021, 1, 1)).unwrap();
        let ranks = ranks(&history);

        assert_eq!(ranks.get("A"), Some(1));
        assert_eq!(ranks.get("B"), Some(1));
    }

    #[test]
    fn rank_after_tie_group_skips() {
        let history =
            history_with_stays(&[("A", 50), ("B", 20), ("C", 20), ("D", 10), ("E", 10), ("F", 1)]);
        let ranks = ranks(&history);

        let got: Vec<Option<u32>> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(|code| ranks.get(code))
            .collect();
        assert_eq!(
            got,
            vec![Some(1), Some(2), Some(2), Some(4), Some(4), Some(6)]
        );
    }

    #[test]
    fn all_ranks_positive_and_equal_days_equal_rank() {
        let history = history_with_stays(&[("A", 3), ("B", 7), ("C", 3), ("D", 7), ("E", 0)]);
        let ranks = ranks(&history);

        for code in history.countries().keys() {
            let rank = ranks.get(code).unwrap();
            assert!(rank >= 1, "{code} has rank {rank}");
        }
        assert_eq!(ranks.get("B"), ranks.get("D"));
        assert_eq!(ranks.get("A"), ranks.get("C"));
        assert_eq!(ranks.get("B"), Some(1));
        assert_eq!(ranks.get("A"), Some(3));
        assert_eq!(ranks.get("E"), Some(5));
    }

    #[test]
    fn descending_order_is_stable_among_ties() {
        let history = history_with_stays(&[("X", 5), ("Y", 9), ("Z", 5)]);
        let order: Vec<&str> = by_days_descending(&history)
            .into_iter()
            .map(|(code, _)| code)
            .collect();
        assert_eq!(order, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn percentages_sum_to_one() {
        let history = history_with_stays(&[("A", 10), ("B", 3), ("C", 2), ("A", 7)]);
        let table = percentages(&history).unwrap();

        let sum: f64 = history
            .countries()
            .keys()
            .map(|code| table.get(code).unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((table.get("A").unwrap() - 17.0 / 22.0).abs() < 1e-12);
    }

    #[test]
    fn zero_total_days_is_an_error() {
        let history = history_with_stays(&[("A", 0)]);
        assert!(matches!(
            percentages(&history),
            Err(TravelError::NoRecordedDays)
        ));
    }
}
