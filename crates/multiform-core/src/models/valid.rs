//! Normalized form value produced by successful validation

use super::form::{DayPlan, FormValues, ModeKind};
use chrono::NaiveDateTime;
use std::fmt;

/// Phone number with exactly 11 digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber(i64);

impl PhoneNumber {
    pub const DIGITS: u32 = 11;

    const MIN: i64 = 10_000_000_000;
    const MAX: i64 = 99_999_999_999;

    pub fn new(value: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Create/edit choice; edit carries the phone number it requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit { phone_number: PhoneNumber },
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Create => ModeKind::Create,
            Mode::Edit { .. } => ModeKind::Edit,
        }
    }
}

/// Checkbox choice; checked carries the day plans it requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckedState {
    Unchecked,
    Checked { days: Vec<DayPlan> },
}

impl CheckedState {
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckedState::Checked { .. })
    }

    pub fn days(&self) -> &[DayPlan] {
        match self {
            CheckedState::Unchecked => &[],
            CheckedState::Checked { days } => days,
        }
    }
}

/// Form value that passed full-schema validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidForm {
    pub email: String,
    pub mode: Mode,
    pub checked: CheckedState,
    pub start_date: Option<NaiveDateTime>,
}

impl From<ValidForm> for FormValues {
    fn from(form: ValidForm) -> Self {
        let phone_number = match form.mode {
            Mode::Create => None,
            Mode::Edit { phone_number } => Some(phone_number.get()),
        };
        let (is_check, days) = match form.checked {
            CheckedState::Unchecked => (false, None),
            CheckedState::Checked { days } => (true, Some(days)),
        };

        FormValues {
            email: form.email,
            mode: form.mode.kind(),
            phone_number,
            is_check,
            days,
            start_date: form.start_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_requires_eleven_digits() {
        assert!(PhoneNumber::new(13800138000).is_some());
        assert!(PhoneNumber::new(99_999_999_999).is_some());
        assert!(PhoneNumber::new(1380013800).is_none());
        assert!(PhoneNumber::new(138001380001).is_none());
        assert!(PhoneNumber::new(11).is_none());
        assert!(PhoneNumber::new(-13800138000).is_none());
    }

    #[test]
    fn test_into_values_drops_inactive_branches() {
        let form = ValidForm {
            email: "a@b.com".to_string(),
            mode: Mode::Create,
            checked: CheckedState::Unchecked,
            start_date: None,
        };
        let values = FormValues::from(form);
        assert_eq!(values.mode, ModeKind::Create);
        assert!(values.phone_number.is_none());
        assert!(!values.is_check);
        assert!(values.days.is_none());
    }

    #[test]
    fn test_into_values_keeps_active_branches() {
        let phone_number = PhoneNumber::new(13800138000).unwrap();
        let form = ValidForm {
            email: "a@b.com".to_string(),
            mode: Mode::Edit { phone_number },
            checked: CheckedState::Checked {
                days: vec![DayPlan::blank(0)],
            },
            start_date: None,
        };
        let values = FormValues::from(form);
        assert_eq!(values.phone_number, Some(13800138000));
        assert!(values.is_check);
        assert_eq!(values.days.map(|d| d.len()), Some(1));
    }
}
