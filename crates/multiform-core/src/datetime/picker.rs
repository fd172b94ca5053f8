//! Presentation model for the three time-unit pickers
//!
//! Pure projections from the current timestamp: which option is selected and
//! where each picker column must scroll to keep that option visible.

use super::selection::TimeUnit;
use chrono::NaiveDateTime;

/// Placeholder shown on the trigger button while no value is set
pub const PLACEHOLDER: &str = "Pick a date";

/// One button in a picker column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: u32,
    pub label: String,
    pub selected: bool,
}

/// Options for `unit`, ascending, with at most one marked selected
pub fn picker_options(unit: TimeUnit, current: Option<NaiveDateTime>) -> Vec<PickerOption> {
    let selected = current.map(|ts| unit.component(&ts));
    unit.values()
        .map(|value| PickerOption {
            value,
            label: format!("{:02}", value),
            selected: selected == Some(value),
        })
        .collect()
}

/// Where a picker column must scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub unit: TimeUnit,
    pub value: u32,
    /// Position of the matching option within its column
    pub position: usize,
}

/// Scroll targets for the hour, minute and second columns.
/// `None` while unset: nothing is selected, nothing scrolls.
pub fn scroll_targets(current: Option<NaiveDateTime>) -> Option<[ScrollTarget; 3]> {
    let ts = current?;
    Some(TimeUnit::ALL.map(|unit| {
        let value = unit.component(&ts);
        let position = unit.values().position(|v| v == value).unwrap_or(0);
        ScrollTarget {
            unit,
            value,
            position,
        }
    }))
}

/// Trigger button label
pub fn format_timestamp(current: Option<NaiveDateTime>) -> String {
    match current {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 20, 30)
            .unwrap()
    }

    #[test]
    fn test_options_are_exhaustive_and_ascending() {
        let hours = picker_options(TimeUnit::Hour, None);
        assert_eq!(hours.len(), 24);
        assert_eq!(hours.first().map(|o| o.value), Some(0));
        assert_eq!(hours.last().map(|o| o.value), Some(23));
        assert!(hours.windows(2).all(|w| w[0].value < w[1].value));
        assert_eq!(hours[5].label, "05");
    }

    #[test]
    fn test_exactly_one_selected() {
        for unit in TimeUnit::ALL {
            let options = picker_options(unit, Some(ts()));
            let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
            assert_eq!(selected.len(), 1, "unit {}", unit);
            assert_eq!(selected[0].value, unit.component(&ts()));
        }
    }

    #[test]
    fn test_nothing_selected_when_unset() {
        for unit in TimeUnit::ALL {
            assert!(picker_options(unit, None).iter().all(|o| !o.selected));
        }
        assert!(scroll_targets(None).is_none());
    }

    #[test]
    fn test_scroll_targets_follow_timestamp() {
        let [hour, minute, second] = scroll_targets(Some(ts())).unwrap();
        assert_eq!((hour.unit, hour.value, hour.position), (TimeUnit::Hour, 10, 10));
        assert_eq!((minute.unit, minute.position), (TimeUnit::Minute, 20));
        assert_eq!((second.unit, second.position), (TimeUnit::Second, 30));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Some(ts())), "2024-01-01 10:20:30");
        assert_eq!(format_timestamp(None), PLACEHOLDER);
    }
}
