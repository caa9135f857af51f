use leptos::prelude::*;
use shared::CONFIG;
use stockbook_core::{AppState, ViewMode};

use crate::api::spawn_refresh;
use crate::components::{NoticeStack, ViewToggle};
use crate::pages::{DashboardPage, EntryPage, GatePage};

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::new(&CONFIG));

    // Initial sync
    spawn_refresh(state);

    let granted = move || state.with(|app| app.access.is_granted());
    let hidden = move |view: ViewMode| state.with(|app| app.view != view);

    view! {
        <main class="max-w-[60ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="font-bold uppercase">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
            </header>

            <Show when=granted fallback=move || view! { <GatePage state=state /> }>
                <ViewToggle state=state />

                // Both views stay mounted; switching only hides one
                <div class:hidden=move || hidden(ViewMode::Entry)>
                    <EntryPage state=state />
                </div>
                {CONFIG.features.dashboard.then(|| view! {
                    <div class:hidden=move || hidden(ViewMode::Dashboard)>
                        <DashboardPage state=state />
                    </div>
                })}

                {move || state.with(|app| app.access.staff_name().map(str::to_string)).map(|name| view! {
                    <footer class="mt-8 text-sm text-[var(--ink-light)]">"Logging as " {name}</footer>
                })}
            </Show>

            <NoticeStack state=state />
        </main>
    }
}
