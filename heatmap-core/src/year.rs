//! The calendar year being rendered.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::constants::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::error::{HeatmapError, HeatmapResult};

/// A calendar year that can be laid out on the grid.
///
/// Construction checks the year against chrono's representable range, so
/// every month of a `Year` has a well-defined first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    value: i32,
    jan_first_weekday: u32,
}

impl Year {
    pub fn new(value: i32) -> HeatmapResult<Self> {
        let jan_first =
            NaiveDate::from_ymd_opt(value, 1, 1).ok_or(HeatmapError::InvalidYear(value))?;
        NaiveDate::from_ymd_opt(value, 12, 31).ok_or(HeatmapError::InvalidYear(value))?;

        Ok(Year {
            value,
            jan_first_weekday: jan_first.weekday().num_days_from_sunday(),
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_leap(&self) -> bool {
        is_leap_year(self.value)
    }

    /// Days in `month` (0 = January).
    pub fn days_in_month(&self, month: u32) -> u32 {
        match month {
            1 if self.is_leap() => 29,
            1 => 28,
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Weekday of the first day of `month` (0 = January), with 0 = Sunday.
    pub fn first_weekday(&self, month: u32) -> u32 {
        let days_before: u32 = (0..month.min(MONTHS_PER_YEAR))
            .map(|m| self.days_in_month(m))
            .sum();
        (self.jan_first_weekday + days_before) % DAYS_PER_WEEK
    }

    /// The calendar date for `day` of `month` (0 = January), if it exists.
    pub fn date(&self, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.value, month + 1, day)
    }

    /// First and last day of the year, as `YYYY-MM-DD`.
    pub fn bounds(&self) -> (String, String) {
        (
            format!("{:04}-01-01", self.value),
            format!("{:04}-12-31", self.value),
        )
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
