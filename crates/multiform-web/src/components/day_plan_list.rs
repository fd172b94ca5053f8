//! Repeatable day-plan section, mounted only while `isCheck` is on

use leptos::prelude::*;
use multiform_core::{DayKey, Field, FieldValue};

use crate::form::use_form;

/// List of day plans with add/remove controls
///
/// Entries are keyed by `DayKey`, so removing a day keeps the inputs of the
/// surviving days mounted and their text intact.
#[component]
pub fn DayPlanList() -> impl IntoView {
    let form = use_form();
    let keys = form.day_keys();
    let days_error = form.error(Field::Days);

    view! {
        <section class="day-plans">
            <h3 class="section-title">"Day plans"</h3>
            <For each=move || keys.get() key=|day| *day let:day>
                <DayPlanCard day_key=day />
            </For>
            {move || days_error.get().map(|message| view! { <p class="form-message">{message}</p> })}
            <button type="button" class="btn btn-secondary" on:click=move |_| form.append_day()>
                "Add new plan"
            </button>
        </section>
    }
}

#[component]
fn DayPlanCard(day_key: DayKey) -> impl IntoView {
    let form = use_form();
    let position = form.day_position(day_key);
    let summary = form.day_summary(day_key);

    let steps = move || summary.get().map_or(0, |(_, steps)| steps);

    view! {
        <div class="day-plan-card" data-key=day_key.to_string()>
            <div class="day-plan-header">
                <span class="day-index">
                    "Day "{move || summary.get().map_or(0, |(day_index, _)| day_index)}
                </span>
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=move |_| form.remove_day(day_key)
                >
                    "Remove day plan"
                </button>
            </div>
            <div class="day-plan-steps">
                {move || {
                    (0..steps())
                        .map(|step| view! { <StepFields position=position step=step /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// `planName` and `desc` inputs for one step; addresses follow the day's position
#[component]
fn StepFields(position: Memo<Option<usize>>, step: usize) -> impl IntoView {
    let form = use_form();

    let plan_name = move || position.get().map(|day| Field::PlanName { day, step });
    let desc = move || position.get().map(|day| Field::Desc { day, step });

    let value_of = move |field: Option<Field>| field.map(|f| form.text(f)).unwrap_or_default();
    let write = move |field: Option<Field>, text: String| {
        if let Some(field) = field {
            form.set_field(field, FieldValue::Text(text));
        }
    };

    let plan_error = form.error_at(plan_name);
    let desc_error = form.error_at(desc);

    view! {
        <div class="step-fields">
            <span class="step-label">{format!("Step {}", step + 1)}</span>
            <div class=move || {
                if plan_error.get().is_some() { "step-field has-error" } else { "step-field" }
            }>
                <input
                    class="input"
                    type="text"
                    placeholder="Plan name"
                    prop:value=move || value_of(plan_name())
                    on:input=move |ev| write(plan_name(), event_target_value(&ev))
                />
                {move || plan_error.get().map(|message| view! { <p class="form-message">{message}</p> })}
            </div>
            <div class=move || {
                if desc_error.get().is_some() { "step-field has-error" } else { "step-field" }
            }>
                <input
                    class="input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || value_of(desc())
                    on:input=move |ev| write(desc(), event_target_value(&ev))
                />
                {move || desc_error.get().map(|message| view! { <p class="form-message">{message}</p> })}
            </div>
        </div>
    }
}
