//! Calendar grid layout.
//!
//! Every month gets exactly `WEEKS_PER_MONTH` columns, one per Sunday-first
//! week, with weekdays as rows. Months that would need a sixth column lose
//! their trailing days; unused columns stay blank so month boundaries line
//! up the same way every year.

use crate::constants::{DAYS_PER_WEEK, MONTHS_PER_YEAR, WEEKS_PER_MONTH};
use crate::year::Year;

/// Placement of one month on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    /// 0 = January.
    pub month: u32,
    pub days: u32,
    /// Weekday of day 1, 0 = Sunday.
    pub first_weekday: u32,
    /// Week columns the whole month would take.
    pub weeks_needed: u32,
    /// Week columns actually drawn, at most `WEEKS_PER_MONTH`.
    pub actual_weeks: u32,
    /// Global column of the month's first week.
    pub start_column: u32,
}

/// A day that gets a cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlot {
    pub day: u32,
    pub column: u32,
    pub row: u32,
}

impl MonthLayout {
    pub fn new(year: &Year, month: u32, start_column: u32) -> Self {
        let days = year.days_in_month(month);
        let first_weekday = year.first_weekday(month);
        let weeks_needed = (first_weekday + days).div_ceil(DAYS_PER_WEEK);

        MonthLayout {
            month,
            days,
            first_weekday,
            weeks_needed,
            actual_weeks: weeks_needed.min(WEEKS_PER_MONTH),
            start_column,
        }
    }

    /// Column the month label is centered over.
    pub fn label_column(&self) -> Option<u32> {
        (self.actual_weeks > 0).then(|| self.start_column + self.actual_weeks / 2)
    }

    /// Column where the next month starts: the drawn weeks plus blank
    /// padding up to `WEEKS_PER_MONTH`.
    pub fn end_column(&self) -> u32 {
        let padding = WEEKS_PER_MONTH - self.actual_weeks;
        self.start_column + self.actual_weeks + padding
    }

    /// Days that fit on the grid, in week-major order.
    pub fn slots(&self) -> impl Iterator<Item = DaySlot> + '_ {
        (0..self.actual_weeks).flat_map(move |week| {
            (0..DAYS_PER_WEEK).filter_map(move |weekday| {
                let day = (week * DAYS_PER_WEEK + weekday + 1).checked_sub(self.first_weekday)?;
                (1..=self.days).contains(&day).then_some(DaySlot {
                    day,
                    column: self.start_column + week,
                    row: weekday,
                })
            })
        })
    }

    /// Number of days that get a cell.
    pub fn rendered_days(&self) -> u32 {
        self.days.min(self.actual_weeks * DAYS_PER_WEEK - self.first_weekday)
    }
}

/// Placement of all twelve months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub months: Vec<MonthLayout>,
    /// Column counter after the last month.
    pub columns: u32,
}

impl GridLayout {
    pub fn for_year(year: &Year) -> Self {
        let mut column = 0;
        let months = (0..MONTHS_PER_YEAR)
            .map(|month| {
                let layout = MonthLayout::new(year, month, column);
                column = layout.end_column();
                layout
            })
            .collect();

        GridLayout {
            months,
            columns: column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRID_COLUMNS;

    #[test]
    fn test_every_month_takes_five_columns() {
        for value in [1900, 2000, 2023, 2024, 2026, 2100] {
            let grid = GridLayout::for_year(&Year::new(value).unwrap());
            assert_eq!(grid.columns, GRID_COLUMNS);
            for (i, month) in grid.months.iter().enumerate() {
                assert_eq!(month.start_column, i as u32 * WEEKS_PER_MONTH);
            }
        }
    }

    #[test]
    fn test_rendered_days_per_month() {
        for value in 1990..2040 {
            let year = Year::new(value).unwrap();
            for month in GridLayout::for_year(&year).months {
                let rendered = month.slots().count() as u32;
                let expected = if month.weeks_needed <= WEEKS_PER_MONTH {
                    month.days
                } else {
                    month.days.min(WEEKS_PER_MONTH * DAYS_PER_WEEK - month.first_weekday)
                };
                assert_eq!(rendered, expected, "{}-{}", value, month.month + 1);
                assert_eq!(month.rendered_days(), expected);
            }
        }
    }

    #[test]
    fn test_sixth_week_is_dropped() {
        // August 2026 starts on a Saturday and spans six weeks.
        let year = Year::new(2026).unwrap();
        let august = MonthLayout::new(&year, 7, 35);

        assert_eq!(august.first_weekday, 6);
        assert_eq!(august.weeks_needed, 6);
        assert_eq!(august.actual_weeks, 5);
        assert_eq!(august.slots().count(), 29);
        assert_eq!(august.slots().last().map(|s| s.day), Some(29));
    }

    #[test]
    fn test_slot_positions() {
        // March 2024 starts on a Friday.
        let year = Year::new(2024).unwrap();
        let march = MonthLayout::new(&year, 2, 10);
        let slots: Vec<_> = march.slots().collect();

        assert_eq!(slots[0], DaySlot { day: 1, column: 10, row: 5 });
        assert_eq!(slots[1], DaySlot { day: 2, column: 10, row: 6 });
        assert_eq!(slots[2], DaySlot { day: 3, column: 11, row: 0 });
        assert!(slots.iter().all(|s| s.column < march.end_column()));
    }

    #[test]
    fn test_label_column_is_centered() {
        let year = Year::new(2024).unwrap();
        let grid = GridLayout::for_year(&year);

        // February 2024 fits in five weeks: centered two columns in.
        assert_eq!(grid.months[1].actual_weeks, 5);
        assert_eq!(grid.months[1].label_column(), Some(7));

        // February 2015 starts on a Sunday and fits in exactly four weeks.
        let feb = MonthLayout::new(&Year::new(2015).unwrap(), 1, 5);
        assert_eq!(feb.actual_weeks, 4);
        assert_eq!(feb.label_column(), Some(7));
        assert_eq!(feb.end_column(), 10);
    }
}
