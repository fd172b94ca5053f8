//! Root Leptos component

use leptos::prelude::*;

use crate::components::{Header, ToastProvider};
use crate::pages::MultiForm;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <div class="app">
                <Header />
                <main class="content">
                    <MultiForm />
                </main>
            </div>
        </ToastProvider>
    }
}
