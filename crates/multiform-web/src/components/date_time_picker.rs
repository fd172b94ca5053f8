//! Date-time picker: calendar plus hour/minute/second columns
//!
//! The picker owns no timestamp of its own. It reads `value` and reports every
//! edit through `on_change`, so the form field stays the single source.

use chrono::{Local, NaiveDate, NaiveDateTime};
use leptos::prelude::*;
use multiform_core::datetime::{format_timestamp, select_date, select_time_component, TimeUnit};

use super::{Calendar, TimeColumn};

#[component]
pub fn DateTimePicker(
    #[prop(into)] value: Signal<Option<NaiveDateTime>>,
    #[prop(into)] on_change: Callback<NaiveDateTime>,
    /// `id` for the trigger button, so a label can point at it
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let selected_date = Signal::derive(move || value.get().map(|ts| ts.date()));

    let on_pick = Callback::new(move |date: NaiveDate| {
        on_change.run(select_date(value.get_untracked(), date));
    });

    let on_select = Callback::new(move |(unit, component): (TimeUnit, u32)| {
        let now = Local::now().naive_local();
        match select_time_component(value.get_untracked(), unit, component, now) {
            Ok(next) => on_change.run(next),
            Err(e) => leptos::logging::warn!("time picker: {}", e),
        }
    });

    let label = move || format_timestamp(value.get());

    view! {
        <div class="date-time-picker">
            <button
                type="button"
                id=id
                class=move || {
                    if value.get().is_some() { "picker-trigger" } else { "picker-trigger placeholder" }
                }
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="picker-icon">"📅"</span>
                <span class="picker-label">{label}</span>
            </button>

            <Show when=move || open.get()>
                <div class="picker-popover">
                    <div class="picker-body">
                        <Calendar selected=selected_date on_pick=on_pick />
                        <div class="time-columns">
                            {TimeUnit::ALL
                                .into_iter()
                                .map(|unit| view! { <TimeColumn unit=unit value=value on_select=on_select /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="picker-footer">
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| open.set(false)
                        >
                            "Done"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
