use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::CONFIG;
use stockbook_core::{Access, AppState};

use crate::components::Section;

/// PIN screen. Tags entries with a name; it does not protect anything.
#[component]
pub fn GatePage(state: RwSignal<AppState>) -> impl IntoView {
    let pin = RwSignal::new(String::new());
    let rejected = move || state.with(|app| matches!(app.access, Access::Locked { rejected: true }));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let entered = pin.get_untracked();
        state.update(|app| app.enter_pin(CONFIG.staff, &entered));
        pin.set(String::new());
    };

    view! {
        <Section id="gate" title="Staff PIN">
            <form class="space-y-3" on:submit=on_submit>
                <input
                    type="password"
                    inputmode="numeric"
                    autocomplete="off"
                    maxlength="8"
                    required
                    class="border border-[var(--rule)] px-2 py-1"
                    prop:value=move || pin.get()
                    on:input=move |ev| pin.set(event_target_value(&ev))
                />
                " "
                <button type="submit">"Unlock"</button>
                <Show when=rejected>
                    <div class="error">"Wrong PIN"</div>
                </Show>
            </form>
            <p class="mt-3 text-sm text-[var(--ink-light)]">
                "Your PIN only stamps your name on the entries you log."
            </p>
        </Section>
    }
}
