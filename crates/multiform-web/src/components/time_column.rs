//! Scrollable picker column for one time unit

use chrono::NaiveDateTime;
use leptos::html;
use leptos::prelude::*;
use multiform_core::datetime::{picker_options, scroll_targets, TimeUnit};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Column of `00..=max` buttons for `unit`, kept scrolled to the selected one
#[component]
pub fn TimeColumn(
    unit: TimeUnit,
    #[prop(into)] value: Signal<Option<NaiveDateTime>>,
    #[prop(into)] on_select: Callback<(TimeUnit, u32)>,
) -> impl IntoView {
    let viewport = NodeRef::<html::Div>::new();

    // Runs on mount and on every timestamp change
    Effect::new(move |_| {
        let Some(targets) = scroll_targets(value.get()) else {
            return;
        };
        let Some(viewport) = viewport.get() else {
            return;
        };
        if let Some(target) = targets.iter().find(|t| t.unit == unit) {
            scroll_to_option(&viewport, target.position);
        }
    });

    view! {
        <div class="time-column" node_ref=viewport data-unit=unit.as_str()>
            {move || {
                picker_options(unit, value.get())
                    .into_iter()
                    .map(|option| {
                        let picked = option.value;
                        let class = if option.selected { "time-option selected" } else { "time-option" };
                        view! {
                            <button
                                type="button"
                                class=class
                                data-value=picked.to_string()
                                aria-pressed=option.selected.to_string()
                                on:click=move |_| on_select.run((unit, picked))
                            >
                                {option.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Smooth-scroll `viewport` so its `position`-th option sits at the top
fn scroll_to_option(viewport: &HtmlElement, position: usize) {
    let Some(option) = viewport.children().item(position as u32) else {
        return;
    };
    let Ok(option) = option.dyn_into::<HtmlElement>() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(option.offset_top()));
    options.set_behavior(ScrollBehavior::Smooth);
    viewport.scroll_to_with_scroll_to_options(&options);
}
