//! Calendar sub-control of the date-time picker

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use multiform_core::datetime::{CalendarMonth, WEEKDAY_LABELS};

/// Month grid; clicking a day calls `on_pick` with that date
#[component]
pub fn Calendar(
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let today = Local::now().date_naive();
    // Opens on the selected month, or the current one
    let initial = selected.get_untracked().unwrap_or(today);
    let month = RwSignal::new(CalendarMonth::containing(initial));

    view! {
        <div class="calendar">
            <div class="calendar-nav">
                <button
                    type="button"
                    class="calendar-nav-btn"
                    on:click=move |_| month.update(|m| *m = m.previous())
                    aria-label="Previous month"
                >
                    "‹"
                </button>
                <span class="calendar-title">{move || month.get().title()}</span>
                <button
                    type="button"
                    class="calendar-nav-btn"
                    on:click=move |_| month.update(|m| *m = m.next())
                    aria-label="Next month"
                >
                    "›"
                </button>
            </div>

            <table class="calendar-grid">
                <thead>
                    <tr>
                        {WEEKDAY_LABELS
                            .iter()
                            .map(|label| view! { <th class="calendar-weekday">{*label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        month
                            .get()
                            .weeks()
                            .into_iter()
                            .map(|week| {
                                view! {
                                    <tr>
                                        {week
                                            .into_iter()
                                            .map(|cell| day_cell(cell, selected, today, on_pick))
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn day_cell(
    cell: Option<NaiveDate>,
    selected: Signal<Option<NaiveDate>>,
    today: NaiveDate,
    on_pick: Callback<NaiveDate>,
) -> AnyView {
    let Some(date) = cell else {
        return view! { <td class="calendar-day empty"></td> }.into_any();
    };

    let class = move || {
        let mut class = String::from("calendar-day-btn");
        if selected.get() == Some(date) {
            class.push_str(" selected");
        }
        if date == today {
            class.push_str(" today");
        }
        class
    };

    view! {
        <td class="calendar-day">
            <button
                type="button"
                class=class
                data-date=date.to_string()
                on:click=move |_| on_pick.run(date)
            >
                {date.format("%-d").to_string()}
            </button>
        </td>
    }
    .into_any()
}
