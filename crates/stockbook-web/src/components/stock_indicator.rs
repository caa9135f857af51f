use leptos::prelude::*;
use stockbook_core::StockBadge;

/// Stock badge next to the product picker; renders nothing when stock is unknown
#[component]
pub fn StockIndicator(#[prop(into)] badge: Signal<Option<StockBadge>>) -> impl IntoView {
    move || {
        badge.get().map(|badge| {
            view! {
                <span class=format!("stock-badge {}", badge.status.css_class())>{badge.label()}</span>
            }
        })
    }
}
