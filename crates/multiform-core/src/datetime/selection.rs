//! Composing a timestamp from calendar picks and per-unit clicks

use crate::error::CoreError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Time-of-day component edited by one picker column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Column order in the picker
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            TimeUnit::Hour => 23,
            TimeUnit::Minute | TimeUnit::Second => 59,
        }
    }

    /// Every selectable value, ascending
    pub fn values(&self) -> RangeInclusive<u32> {
        0..=self.max()
    }

    /// This unit's component of `timestamp`
    pub fn component(&self, timestamp: &NaiveDateTime) -> u32 {
        match self {
            TimeUnit::Hour => timestamp.hour(),
            TimeUnit::Minute => timestamp.minute(),
            TimeUnit::Second => timestamp.second(),
        }
    }

    fn check(&self, value: u32) -> Result<u32, CoreError> {
        if value > self.max() {
            return Err(CoreError::TimeComponentOutOfRange {
                unit: self.as_str(),
                value,
                max: self.max(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "minute" | "minutes" => Ok(TimeUnit::Minute),
            "second" | "seconds" => Ok(TimeUnit::Second),
            other => Err(CoreError::InvalidTimeUnit {
                unit: other.to_string(),
            }),
        }
    }
}

/// Merge a calendar pick into `current`, keeping its time of day.
/// Without a current value the time is midnight.
pub fn select_date(current: Option<NaiveDateTime>, date: NaiveDate) -> NaiveDateTime {
    let time = current.map_or(NaiveTime::MIN, |c| c.time());
    date.and_time(time)
}

/// Replace exactly one time component. Without a current value the base is
/// `now`, truncated to whole seconds.
pub fn select_time_component(
    current: Option<NaiveDateTime>,
    unit: TimeUnit,
    value: u32,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, CoreError> {
    let value = unit.check(value)?;
    let base = match current {
        Some(current) => current,
        None => now.with_nanosecond(0).unwrap_or(now),
    };

    let updated = match unit {
        TimeUnit::Hour => base.with_hour(value),
        TimeUnit::Minute => base.with_minute(value),
        TimeUnit::Second => base.with_second(value),
    };

    updated.ok_or(CoreError::TimeComponentOutOfRange {
        unit: unit.as_str(),
        value,
        max: unit.max(),
    })
}

/// String form used by the picker buttons (`"hour"`, `"5"`)
pub fn select_time_component_str(
    current: Option<NaiveDateTime>,
    unit: &str,
    value: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, CoreError> {
    let unit: TimeUnit = unit.parse()?;
    let value = value
        .trim()
        .parse::<u32>()
        .map_err(|_| CoreError::InvalidTimeValue {
            unit: unit.as_str(),
            value: value.to_string(),
        })?;
    select_time_component(current, unit, value, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_select_date_preserves_time() {
        let current = at(2024, 1, 1, 10, 20, 30);
        let picked = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(
            select_date(Some(current), picked),
            at(2024, 3, 3, 10, 20, 30)
        );
    }

    #[test]
    fn test_select_date_without_current_is_midnight() {
        let picked = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(select_date(None, picked), at(2024, 3, 3, 0, 0, 0));
    }

    #[test]
    fn test_select_each_component() {
        let current = at(2024, 1, 1, 10, 20, 30);
        let now = at(2000, 6, 6, 6, 6, 6);

        assert_eq!(
            select_time_component(Some(current), TimeUnit::Hour, 5, now).unwrap(),
            at(2024, 1, 1, 5, 20, 30)
        );
        assert_eq!(
            select_time_component(Some(current), TimeUnit::Minute, 0, now).unwrap(),
            at(2024, 1, 1, 10, 0, 30)
        );
        assert_eq!(
            select_time_component(Some(current), TimeUnit::Second, 59, now).unwrap(),
            at(2024, 1, 1, 10, 20, 59)
        );
    }

    #[test]
    fn test_select_component_defaults_to_now() {
        let now = at(2024, 5, 5, 8, 9, 10)
            .with_nanosecond(123_000_000)
            .unwrap();
        let selected = select_time_component(None, TimeUnit::Minute, 45, now).unwrap();
        assert_eq!(selected, at(2024, 5, 5, 8, 45, 10));
    }

    #[test]
    fn test_select_component_out_of_range() {
        let now = at(2024, 1, 1, 0, 0, 0);
        assert!(matches!(
            select_time_component(None, TimeUnit::Hour, 24, now),
            Err(CoreError::TimeComponentOutOfRange {
                unit: "hour",
                value: 24,
                max: 23
            })
        ));
        assert!(select_time_component(None, TimeUnit::Second, 60, now).is_err());
    }

    #[test]
    fn test_string_form() {
        let current = at(2024, 1, 1, 10, 20, 30);
        let now = at(2000, 1, 1, 0, 0, 0);
        assert_eq!(
            select_time_component_str(Some(current), "hour", "5", now).unwrap(),
            at(2024, 1, 1, 5, 20, 30)
        );
        assert!(matches!(
            select_time_component_str(Some(current), "day", "5", now),
            Err(CoreError::InvalidTimeUnit { .. })
        ));
        assert!(matches!(
            select_time_component_str(Some(current), "minute", "x", now),
            Err(CoreError::InvalidTimeValue { .. })
        ));
    }

    #[test]
    fn test_unit_ranges() {
        assert_eq!(TimeUnit::Hour.values().count(), 24);
        assert_eq!(TimeUnit::Minute.values().count(), 60);
        assert_eq!(TimeUnit::Second.values().count(), 60);
    }
}
