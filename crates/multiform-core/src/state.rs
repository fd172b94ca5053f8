//! Form state container
//!
//! `FormState` is the single owner of the values being edited. Every mutation
//! goes through a named operation so the `isCheck` rule (unchecking drops all
//! day plans) holds no matter which path changed the flag.

use crate::error::CoreError;
use crate::field::{Field, FieldValue};
use crate::models::{DayPlan, FormValues, ModeKind, Step, ValidForm};
use crate::submit::SubmitHandler;
use crate::validation::{validate, ValidationReport};
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

/// Session-unique identity of a day entry, stable across removals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(u64);

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day plan plus its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub key: DayKey,
    pub plan: DayPlan,
}

/// Values of one editing session plus its error state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    email: String,
    mode: ModeKind,
    phone_number: Option<i64>,
    is_check: bool,
    /// `None` exactly when `is_check` is false
    days: Option<Vec<DayEntry>>,
    start_date: Option<NaiveDateTime>,

    next_key: u64,
    errors: ValidationReport,
    submit_count: u32,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current values in wire shape
    pub fn values(&self) -> FormValues {
        FormValues {
            email: self.email.clone(),
            mode: self.mode,
            phone_number: self.phone_number,
            is_check: self.is_check,
            days: self.day_plans(),
            start_date: self.start_date,
        }
    }

    pub fn mode(&self) -> ModeKind {
        self.mode
    }

    pub fn is_check(&self) -> bool {
        self.is_check
    }

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.start_date
    }

    /// Live day entries; empty while unchecked
    pub fn days(&self) -> &[DayEntry] {
        self.days.as_deref().unwrap_or_default()
    }

    fn day_plans(&self) -> Option<Vec<DayPlan>> {
        self.days
            .as_ref()
            .map(|days| days.iter().map(|d| d.plan.clone()).collect())
    }

    // ===================
    // Mutations
    // ===================

    /// Update one field. Re-validates only after a submit was attempted.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), CoreError> {
        match (field, value) {
            (Field::Email, FieldValue::Text(email)) => self.email = email,
            (Field::Mode, FieldValue::Mode(mode)) => self.mode = mode,
            (Field::PhoneNumber, FieldValue::Integer(phone_number)) => {
                self.phone_number = phone_number
            }
            (Field::IsCheck, FieldValue::Bool(is_check)) => self.apply_is_check(is_check),
            (Field::StartDate, FieldValue::Timestamp(start_date)) => self.start_date = start_date,
            (Field::Days, FieldValue::Days(plans)) => {
                self.replace_days(plans.unwrap_or_default())?
            }
            (Field::DayIndex { day }, FieldValue::Index(day_index)) => {
                self.day_mut(day)?.plan.day_index = day_index
            }
            (Field::PlanName { day, step }, FieldValue::Text(text)) => {
                self.step_mut(day, step)?.plan_name = text
            }
            (Field::Desc { day, step }, FieldValue::Text(text)) => {
                self.step_mut(day, step)?.desc = text
            }
            (field, value) => return Err(field.mismatch(&value)),
        }

        debug!(field = %field, "Field updated");
        self.revalidate();
        Ok(())
    }

    /// Current value of one field
    pub fn watch(&self, field: Field) -> Result<FieldValue, CoreError> {
        let value = match field {
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::Mode => FieldValue::Mode(self.mode),
            Field::PhoneNumber => FieldValue::Integer(self.phone_number),
            Field::IsCheck => FieldValue::Bool(self.is_check),
            Field::Days => FieldValue::Days(self.day_plans()),
            Field::StartDate => FieldValue::Timestamp(self.start_date),
            Field::DayIndex { day } => FieldValue::Index(self.day(day)?.plan.day_index),
            Field::PlanName { day, step } => {
                FieldValue::Text(self.step(day, step)?.plan_name.clone())
            }
            Field::Desc { day, step } => FieldValue::Text(self.step(day, step)?.desc.clone()),
        };
        Ok(value)
    }

    /// Append a day of blank steps with `dayIndex` = current length
    pub fn append_day(&mut self) -> Result<DayKey, CoreError> {
        let key = self.mint_key();
        let days = self.days.as_mut().ok_or(CoreError::DaysUnavailable)?;
        let day_index = days.len();
        days.push(DayEntry {
            key,
            plan: DayPlan::blank(day_index),
        });

        debug!(day_index, "Day appended");
        self.revalidate();
        Ok(key)
    }

    /// Remove the day at `index`. Later entries shift down; no `dayIndex` is rewritten.
    pub fn remove_day(&mut self, index: usize) -> Result<DayPlan, CoreError> {
        let days = self.days.as_mut().ok_or(CoreError::DaysUnavailable)?;
        if index >= days.len() {
            return Err(CoreError::IndexOutOfRange {
                field: "days".to_string(),
                index,
                len: days.len(),
            });
        }
        let removed = days.remove(index);

        debug!(index, day_index = removed.plan.day_index, "Day removed");
        self.revalidate();
        Ok(removed.plan)
    }

    /// Remove the day with `key`, wherever it currently sits
    pub fn remove_day_by_key(&mut self, key: DayKey) -> Result<DayPlan, CoreError> {
        let index = self
            .days()
            .iter()
            .position(|d| d.key == key)
            .ok_or(CoreError::DayNotFound)?;
        self.remove_day(index)
    }

    fn replace_days(&mut self, plans: Vec<DayPlan>) -> Result<(), CoreError> {
        if !self.is_check {
            return Err(CoreError::DaysUnavailable);
        }
        let entries = plans
            .into_iter()
            .map(|plan| DayEntry {
                key: self.mint_key(),
                plan,
            })
            .collect();
        self.days = Some(entries);
        Ok(())
    }

    fn apply_is_check(&mut self, is_check: bool) {
        match (self.is_check, is_check) {
            (true, false) => {
                let dropped = self.days.take().map_or(0, |d| d.len());
                debug!(dropped, "isCheck cleared, day plans dropped");
            }
            (false, true) => self.days = Some(Vec::new()),
            _ => {}
        }
        self.is_check = is_check;
    }

    fn mint_key(&mut self) -> DayKey {
        let key = DayKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn day(&self, day: usize) -> Result<&DayEntry, CoreError> {
        let days = self.days.as_ref().ok_or(CoreError::DaysUnavailable)?;
        days.get(day).ok_or(CoreError::IndexOutOfRange {
            field: "days".to_string(),
            index: day,
            len: days.len(),
        })
    }

    fn day_mut(&mut self, day: usize) -> Result<&mut DayEntry, CoreError> {
        let days = self.days.as_mut().ok_or(CoreError::DaysUnavailable)?;
        let len = days.len();
        days.get_mut(day).ok_or(CoreError::IndexOutOfRange {
            field: "days".to_string(),
            index: day,
            len,
        })
    }

    fn step(&self, day: usize, step: usize) -> Result<&Step, CoreError> {
        let steps = &self.day(day)?.plan.steps;
        steps.get(step).ok_or(CoreError::IndexOutOfRange {
            field: format!("days.{}.steps", day),
            index: step,
            len: steps.len(),
        })
    }

    fn step_mut(&mut self, day: usize, step: usize) -> Result<&mut Step, CoreError> {
        let steps = &mut self.day_mut(day)?.plan.steps;
        let len = steps.len();
        steps.get_mut(step).ok_or(CoreError::IndexOutOfRange {
            field: format!("days.{}.steps", day),
            index: step,
            len,
        })
    }

    // ===================
    // Validation & Submit
    // ===================

    /// Validate everything; on success hand the value to `handler` and reset
    pub fn submit<H>(&mut self, handler: &mut H) -> Result<ValidForm, ValidationReport>
    where
        H: SubmitHandler + ?Sized,
    {
        self.submit_count += 1;

        match validate(&self.values()) {
            Ok(form) => {
                info!(
                    mode = %form.mode.kind(),
                    days = form.checked.days().len(),
                    "Submit accepted"
                );
                handler.on_valid_submit(&form);
                self.reset();
                Ok(form)
            }
            Err(report) => {
                warn!(errors = report.len(), "Submit rejected");
                self.errors = report.clone();
                Err(report)
            }
        }
    }

    /// Errors from the last validation run
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// First error message for `field`, if any
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.message_for(&field.path())
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Back to defaults. Day keys keep counting so identities are never reused.
    pub fn reset(&mut self) {
        *self = Self {
            next_key: self.next_key,
            ..Self::default()
        };
    }

    fn revalidate(&mut self) {
        if self.is_submitted() {
            self.errors = validate(&self.values()).err().unwrap_or_default();
        }
    }
}
