//! Data models for multiform

pub mod form;
pub mod valid;

pub use form::{DayPlan, FormValues, ModeKind, Step, STEPS_PER_DAY};
pub use valid::{CheckedState, Mode, PhoneNumber, ValidForm};
