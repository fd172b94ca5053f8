//! Leptos UI components

mod calendar;
mod date_time_picker;
mod day_plan_list;
mod form_item;
mod header;
mod time_column;
mod toast;

pub use calendar::Calendar;
pub use date_time_picker::DateTimePicker;
pub use day_plan_list::DayPlanList;
pub use form_item::FormItem;
pub use header::Header;
pub use time_column::TimeColumn;
pub use toast::{use_toast, ToastContext, ToastKind, ToastProvider};
