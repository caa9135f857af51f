use leptos::prelude::*;

/// One headline figure
#[component]
pub fn Kpi(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    /// Secondary line under the value (deltas, context)
    #[prop(optional, into)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="border border-dashed border-[var(--rule)] p-3">
            <div class="text-sm uppercase text-[var(--ink-light)]">{label}</div>
            <div class="text-lg font-bold">{value}</div>
            {hint.map(|hint| view! { <div class="text-sm text-[var(--ink-light)]">{hint}</div> })}
        </div>
    }
}
