use leptos::prelude::*;
use shared::CONFIG;
use stockbook_core::{AppState, ViewMode};

/// Entry / dashboard switch. Only rendered when the dashboard is enabled.
#[component]
pub fn ViewToggle(state: RwSignal<AppState>) -> impl IntoView {
    let tab = move |view: ViewMode, label: &'static str| {
        view! {
            <button
                type="button"
                class="tab"
                class:active=move || state.with(|app| app.view == view)
                on:click=move |_| state.update(|app| app.switch_view(view))
            >
                {label}
            </button>
        }
    };

    CONFIG.features.dashboard.then(|| {
        view! {
            <nav class="flex gap-2 mb-6">
                {tab(ViewMode::Entry, "Log entry")}
                {tab(ViewMode::Dashboard, "Dashboard")}
            </nav>
        }
    })
}
