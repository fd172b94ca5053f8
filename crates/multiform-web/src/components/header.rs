//! Header component

use leptos::prelude::*;

/// Page header with title and subtitle
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">"multiform"</h1>
                <p class="subtitle">"Multi-step form demo"</p>
            </div>
        </header>
    }
}
