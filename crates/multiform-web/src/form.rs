//! Reactive handle over the core form state
//!
//! One `RwSignal<FormState>` holds the whole editing session. Components get
//! a `FormHandle` from context and read through memos, so only the fields a
//! view watches trigger its re-render.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use multiform_core::{
    submission_payload, DayKey, Field, FieldValue, FormState, ModeKind, SubmitHandler, ValidForm,
    ValidationReport,
};

/// Logs the submitted payload to the browser console
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSubmitHandler;

impl SubmitHandler for ConsoleSubmitHandler {
    fn on_valid_submit(&mut self, form: &ValidForm) {
        match submission_payload(form) {
            Ok(payload) => leptos::logging::log!("submit: {}", payload),
            Err(e) => leptos::logging::error!("submit: payload not serializable: {}", e),
        }
    }
}

/// Copyable handle to the form session
#[derive(Clone, Copy)]
pub struct FormHandle {
    state: RwSignal<FormState>,
}

impl FormHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::new()),
        }
    }

    /// Update one field; misuse is logged, never surfaced to the user
    pub fn set_field(&self, field: Field, value: FieldValue) {
        self.state.update(|state| {
            if let Err(e) = state.set_field(field, value) {
                leptos::logging::warn!("set_field {}: {}", field, e);
            }
        });
    }

    /// Memo that re-derives whenever `field` changes
    pub fn watch(&self, field: Field) -> Memo<Option<FieldValue>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.watch(field).ok()))
    }

    /// Current text of a text field, tracked
    pub fn text(&self, field: Field) -> String {
        self.state.with(|s| {
            s.watch(field)
                .ok()
                .and_then(|v| v.as_text().map(str::to_string))
                .unwrap_or_default()
        })
    }

    /// Drives mounting of the day-plan section
    pub fn is_check(&self) -> Memo<bool> {
        let watched = self.watch(Field::IsCheck);
        Memo::new(move |_| {
            watched
                .get()
                .and_then(|value| value.as_bool())
                .unwrap_or(false)
        })
    }

    pub fn mode(&self) -> Memo<ModeKind> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.mode()))
    }

    pub fn start_date(&self) -> Memo<Option<NaiveDateTime>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.start_date()))
    }

    pub fn phone_number(&self) -> Memo<Option<i64>> {
        let state = self.state;
        Memo::new(move |_| {
            state.with(|s| match s.watch(Field::PhoneNumber) {
                Ok(FieldValue::Integer(n)) => n,
                _ => None,
            })
        })
    }

    /// Identities of the live day entries, in list order
    pub fn day_keys(&self) -> Memo<Vec<DayKey>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.days().iter().map(|d| d.key).collect()))
    }

    /// Current position of the day with `key`; shifts when earlier days go
    pub fn day_position(&self, key: DayKey) -> Memo<Option<usize>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.days().iter().position(|d| d.key == key)))
    }

    /// `dayIndex` and step count of the day with `key`
    pub fn day_summary(&self, key: DayKey) -> Memo<Option<(usize, usize)>> {
        let state = self.state;
        Memo::new(move |_| {
            state.with(|s| {
                s.days()
                    .iter()
                    .find(|d| d.key == key)
                    .map(|d| (d.plan.day_index, d.plan.steps.len()))
            })
        })
    }

    pub fn append_day(&self) {
        self.state.update(|state| {
            if let Err(e) = state.append_day() {
                leptos::logging::warn!("append_day: {}", e);
            }
        });
    }

    pub fn remove_day(&self, key: DayKey) {
        self.state.update(|state| {
            if let Err(e) = state.remove_day_by_key(key) {
                leptos::logging::warn!("remove_day: {}", e);
            }
        });
    }

    /// Error message beside `field`
    pub fn error(&self, field: Field) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error_for(field).map(str::to_string)))
    }

    /// Error message for a field whose address moves (day entries)
    pub fn error_at(
        &self,
        field: impl Fn() -> Option<Field> + Send + Sync + 'static,
    ) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || {
            let field = field()?;
            state.with(|s| s.error_for(field).map(str::to_string))
        })
    }

    /// Validate and submit; `None` if the session was disposed
    pub fn submit<H: SubmitHandler>(
        &self,
        handler: &mut H,
    ) -> Option<Result<ValidForm, ValidationReport>> {
        self.state.try_update(|state| state.submit(handler))
    }
}

impl Default for FormHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Form handle provided by the nearest form page
pub fn use_form() -> FormHandle {
    expect_context::<FormHandle>()
}
