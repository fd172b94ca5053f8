//! Labelled form field with description and error message

use leptos::prelude::*;

/// One field row: label, control, optional description, error message
///
/// # Example
/// ```ignore
/// view! {
///     <FormItem label="Email" description="This is your email." error=form.error(Field::Email)>
///         <input class="input" />
///     </FormItem>
/// }
/// ```
#[component]
pub fn FormItem(
    #[prop(into)] label: String,
    /// Help text under the control
    #[prop(optional, into)]
    description: Option<String>,
    /// `id` of the control the label points at
    #[prop(optional, into)]
    control_id: Option<String>,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || {
            if error.get().is_some() { "form-item has-error" } else { "form-item" }
        }>
            <label class="form-label" for=control_id>
                {label}
            </label>
            {children()}
            {description.map(|text| view! { <p class="form-description">{text}</p> })}
            {move || error.get().map(|message| view! { <p class="form-message">{message}</p> })}
        </div>
    }
}
