//! Month grid for the calendar sub-control

use chrono::{Datelike, Months, NaiveDate};

/// Column headers, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// `month` is 1-based; `None` for an invalid month
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first
            .pred_opt()
            .map_or(31, |last| last.day())
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Monday-first week rows; cells outside the month are `None`
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let leading = self.first.weekday().num_days_from_monday() as usize;
        let days = self.days_in_month() as usize;
        let rows = (leading + days).div_ceil(7);

        (0..rows)
            .map(|row| {
                std::array::from_fn(|col| {
                    let cell = row * 7 + col;
                    if cell < leading || cell >= leading + days {
                        None
                    } else {
                        self.first.with_day((cell - leading + 1) as u32)
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_month() {
        assert!(CalendarMonth::new(2024, 0).is_none());
        assert!(CalendarMonth::new(2024, 13).is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(CalendarMonth::new(2024, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = CalendarMonth::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), CalendarMonth::new(2023, 12).unwrap());
        assert_eq!(jan.previous().next(), jan);
    }

    #[test]
    fn test_title() {
        assert_eq!(CalendarMonth::new(2024, 3).unwrap().title(), "March 2024");
    }

    #[test]
    fn test_weeks_grid() {
        // March 2024 starts on a Friday
        let march = CalendarMonth::containing(date(2024, 3, 17));
        let weeks = march.weeks();

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][..4], [None, None, None, None]);
        assert_eq!(weeks[0][4], Some(date(2024, 3, 1)));
        assert_eq!(weeks[4][6], Some(date(2024, 3, 31)));

        let filled = weeks.iter().flatten().flatten().count();
        assert_eq!(filled, 31);
    }

    #[test]
    fn test_month_starting_monday() {
        // April 2024 starts on a Monday
        let april = CalendarMonth::new(2024, 4).unwrap();
        assert_eq!(april.weeks()[0][0], Some(date(2024, 4, 1)));
        assert_eq!(april.weeks()[4][1], Some(date(2024, 4, 30)));
        assert_eq!(april.weeks()[4][2], None);
    }
}
