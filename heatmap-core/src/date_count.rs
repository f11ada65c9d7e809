//! Per-day aggregation of records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::record::Record;
use crate::year::Year;

/// Number of records per calendar date.
///
/// Dates with no records are absent and read back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateCount {
    counts: BTreeMap<NaiveDate, u32>,
}

impl DateCount {
    /// Count records by the calendar day of their start value.
    ///
    /// Records without a start value, or whose start does not begin with a
    /// `YYYY-MM-DD` date, are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter_map(|record| record.start().and_then(normalize_start))
            .collect()
    }

    pub fn get(&self, date: NaiveDate) -> u32 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.counts.iter().map(|(date, count)| (*date, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct days with at least one record.
    pub fn active_days(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Day with the most records. Ties go to the earliest day.
    pub fn busiest(&self) -> Option<(NaiveDate, u32)> {
        self.iter()
            .fold(None, |best: Option<(NaiveDate, u32)>, (date, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((date, count)),
            })
    }

    /// Only the days that fall within `year`.
    pub fn in_year(&self, year: &Year) -> Self {
        self.iter()
            .filter(|(date, _)| date.year() == year.value())
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

impl From<BTreeMap<NaiveDate, u32>> for DateCount {
    fn from(counts: BTreeMap<NaiveDate, u32>) -> Self {
        DateCount { counts }
    }
}

impl FromIterator<NaiveDate> for DateCount {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for date in iter {
            *counts.entry(date).or_insert(0) += 1;
        }
        DateCount { counts }
    }
}

/// Reduce a start value to its calendar day.
///
/// Everything from the first `T` on (time of day, offset) is dropped, so
/// `2024-03-05T23:30:00-08:00` counts towards 2024-03-05 as written.
pub fn normalize_start(start: &str) -> Option<NaiveDate> {
    let day = start.split('T').next()?.trim();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_collapses_times_on_same_day() {
        let records = vec![
            Record::starting("2024-03-05T10:00:00Z"),
            Record::starting("2024-03-05"),
        ];

        let counts = DateCount::from_records(&records);

        assert_eq!(counts.get(date(2024, 3, 5)), 2);
        assert_eq!(counts.active_days(), 1);
    }

    #[test]
    fn test_skips_records_without_start() {
        let records = vec![
            Record::default(),
            Record {
                date: Some(Default::default()),
            },
            Record::starting("not a date"),
            Record::starting("2024-13-01"),
            Record::starting(""),
            Record::starting("2024-01-02"),
        ];

        let counts = DateCount::from_records(&records);

        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get(date(2024, 1, 2)), 1);
    }

    #[test]
    fn test_absent_dates_read_as_zero() {
        let counts = DateCount::default();
        assert!(counts.is_empty());
        assert_eq!(counts.get(date(2024, 6, 1)), 0);
        assert_eq!(counts.busiest(), None);
    }

    #[test]
    fn test_end_to_end_counts() {
        let records = vec![
            Record::starting("2024-01-01"),
            Record::starting("2024-01-01"),
            Record::starting("2024-12-31"),
        ];

        let counts = DateCount::from_records(&records);

        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![(date(2024, 1, 1), 2), (date(2024, 12, 31), 1)]
        );
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.busiest(), Some((date(2024, 1, 1), 2)));
    }

    #[test]
    fn test_busiest_prefers_earliest_on_tie() {
        let counts: DateCount = [date(2024, 5, 2), date(2024, 5, 2), date(2024, 2, 1), date(2024, 2, 1)]
            .into_iter()
            .collect();

        assert_eq!(counts.busiest(), Some((date(2024, 2, 1), 2)));
    }

    #[test]
    fn test_in_year_drops_other_years() {
        let counts: DateCount = [date(2023, 12, 31), date(2024, 1, 1), date(2025, 1, 1)]
            .into_iter()
            .collect();

        let year = Year::new(2024).unwrap();
        let filtered = counts.in_year(&year);

        assert_eq!(filtered.iter().collect::<Vec<_>>(), vec![(date(2024, 1, 1), 1)]);
    }

    #[test]
    fn test_serializes_as_date_map() {
        let counts: DateCount = [date(2024, 1, 1), date(2024, 1, 1)].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"2024-01-01":2}"#);
    }
}
