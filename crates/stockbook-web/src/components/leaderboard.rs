use leptos::prelude::*;
use shared::CONFIG;
use stockbook_core::format::format_money;
use stockbook_core::snapshot::LeaderEntry;

/// Pre-ranked list from the sheet, shown in the order received
#[component]
pub fn Leaderboard(
    #[prop(into)] title: String,
    entries: Vec<LeaderEntry>,
    /// Values are money rather than counts
    #[prop(optional)]
    money: bool,
) -> impl IntoView {
    let empty = entries.is_empty();
    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| {
            let value = if money {
                format_money(entry.value, CONFIG.currency)
            } else {
                entry.value.to_string()
            };
            view! {
                <li class="flex justify-between">
                    <span>{rank + 1} ". " {entry.name}</span>
                    <span class="font-mono">{value}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div>
            <strong class="uppercase">{title}</strong>
            <ol class="mt-1 text-sm">{rows}</ol>
            {empty.then(|| view! { <div class="text-sm text-[var(--ink-light)]">"No sales yet"</div> })}
        </div>
    }
}
