use leptos::prelude::*;
use stockbook_core::{AppState, Notice};

/// Transient feedback messages, oldest on top
#[component]
pub fn NoticeStack(state: RwSignal<AppState>) -> impl IntoView {
    view! {
        <div class="notices" aria-live="polite">
            <For
                each=move || state.with(|app| app.notices.visible().to_vec())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    view! { <div class=format!("notice {}", notice.kind.css_class())>{notice.text}</div> }
                }
            />
        </div>
    }
}
