use leptos::prelude::*;

/// Titled block with the dashed rule on the left
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    /// Small text after the title, e.g. the selected period
    #[prop(optional, into)]
    note: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="mb-8">
            <h2 class="font-bold uppercase mb-3">
                {format!("─┤ {} ├─", title)}
                <span class="ml-2 font-normal normal-case text-[var(--ink-light)]">{move || note.get()}</span>
            </h2>
            <div class="pl-4 border-l border-dashed border-[var(--rule)]">
                {children()}
            </div>
        </section>
    }
}
