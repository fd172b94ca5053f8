//! Date-time selection model
//!
//! Backs the calendar + hour/minute/second picker control. Nothing here
//! touches the DOM; the web crate calls these projections from its effects.

pub mod calendar;
pub mod picker;
pub mod selection;

pub use calendar::{CalendarMonth, WEEKDAY_LABELS};
pub use picker::{
    format_timestamp, picker_options, scroll_targets, PickerOption, ScrollTarget, PLACEHOLDER,
};
pub use selection::{select_date, select_time_component, select_time_component_str, TimeUnit};
