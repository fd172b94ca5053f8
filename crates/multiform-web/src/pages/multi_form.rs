//! Multi-step form page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use multiform_core::{Field, FieldValue, ModeKind};

use crate::components::{use_toast, DateTimePicker, DayPlanList, FormItem};
use crate::form::{ConsoleSubmitHandler, FormHandle};

#[component]
pub fn MultiForm() -> impl IntoView {
    let form = FormHandle::new();
    provide_context(form);
    let toast = use_toast();

    let mode = form.mode();
    let is_check = form.is_check();
    let phone_number = form.phone_number();
    let start_date = form.start_date();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.submit(&mut ConsoleSubmitHandler) {
            Some(Ok(_)) => toast.success("Form submitted"),
            Some(Err(report)) => toast.error(format!("Please fix {} field(s)", report.len())),
            None => {}
        }
    };

    view! {
        <div class="page multi-form">
            <h2 class="page-title">"Multi Form"</h2>
            <form class="form" novalidate on:submit=on_submit>
                <FormItem
                    label="Email"
                    description="This is your email."
                    control_id="email"
                    error=form.error(Field::Email)
                >
                    <input
                        id="email"
                        class="input"
                        type="email"
                        placeholder="email"
                        prop:value=move || form.text(Field::Email)
                        on:input=move |ev| {
                            form.set_field(Field::Email, FieldValue::Text(event_target_value(&ev)))
                        }
                    />
                </FormItem>

                <FormItem label="Mode" control_id="mode" error=form.error(Field::Mode)>
                    <select
                        id="mode"
                        class="select"
                        prop:value=move || mode.get().to_string()
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<ModeKind>() {
                                Ok(kind) => form.set_field(Field::Mode, FieldValue::Mode(kind)),
                                Err(e) => leptos::logging::warn!("mode select: {}", e),
                            }
                        }
                    >
                        <option value="create">"Create"</option>
                        <option value="edit">"Edit"</option>
                    </select>
                </FormItem>

                <Show when=move || mode.get() == ModeKind::Edit>
                    <FormItem
                        label="Phone number"
                        description="11 digits."
                        control_id="phone-number"
                        error=form.error(Field::PhoneNumber)
                    >
                        <input
                            id="phone-number"
                            class="input"
                            type="number"
                            inputmode="numeric"
                            placeholder="phoneNumber"
                            prop:value=move || {
                                phone_number.get().map(|n| n.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                // Unparseable input counts as missing
                                let number = event_target_value(&ev).trim().parse::<i64>().ok();
                                form.set_field(Field::PhoneNumber, FieldValue::Integer(number));
                            }
                        />
                    </FormItem>
                </Show>

                <FormItem
                    label="Start date"
                    control_id="start-date"
                    error=form.error(Field::StartDate)
                >
                    <DateTimePicker
                        id="start-date"
                        value=start_date
                        on_change=Callback::new(move |ts| {
                            form.set_field(Field::StartDate, FieldValue::Timestamp(Some(ts)))
                        })
                    />
                </FormItem>

                <div class="form-item checkbox-item">
                    <input
                        id="is-check"
                        type="checkbox"
                        class="checkbox"
                        prop:checked=move || is_check.get()
                        on:change=move |ev| {
                            form.set_field(Field::IsCheck, FieldValue::Bool(event_target_checked(&ev)))
                        }
                    />
                    <div class="checkbox-text">
                        <label class="form-label" for="is-check">"Yes or No"</label>
                        <p class="form-description">"No desc."</p>
                    </div>
                </div>

                <Show when=move || is_check.get()>
                    <DayPlanList />
                </Show>

                <button type="submit" class="btn btn-primary">"Submit"</button>
            </form>
        </div>
    }
}
