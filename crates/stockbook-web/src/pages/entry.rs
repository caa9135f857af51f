use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::CONFIG;
use stockbook_core::constants::PRODUCT_PROMPT;
use stockbook_core::{AppState, FormEvent, SaleType};

use crate::api::spawn_submit;
use crate::components::{Section, StockIndicator};

/// Sales / expense entry form
#[component]
pub fn EntryPage(state: RwSignal<AppState>) -> impl IntoView {
    let send = move |event: FormEvent| state.update(|app| app.on_form_event(event));
    let layout = Memo::new(move |_| state.with(|app| app.form.layout(CONFIG.currency)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_submit(state);
    };

    let category_options = move || {
        state
            .with(|app| app.form.category_options.names().to_vec())
            .into_iter()
            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
            .collect_view()
    };

    let product_options = move || {
        state
            .with(|app| app.form.product_options.clone())
            .into_iter()
            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
            .collect_view()
    };

    view! {
        <Section id="entry" title="Log Transaction">
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="saleType">"Type"</label>
                    <select
                        id="saleType"
                        prop:value=move || state.with(|app| app.form.mode.as_str())
                        on:change=move |ev| {
                            if let Ok(mode) = event_target_value(&ev).parse::<SaleType>() {
                                send(FormEvent::ModeChanged(mode));
                            }
                        }
                    >
                        {SaleType::ALL
                            .iter()
                            .map(|mode| view! { <option value=mode.as_str()>{mode.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class:hidden=move || !layout.get().show_catalog>
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        required=move || layout.get().catalog_required
                        disabled=move || state.with(|app| !app.form.category_options.is_enabled())
                        prop:value=move || state.with(|app| app.form.category.clone())
                        on:change=move |ev| send(FormEvent::CategoryChanged(event_target_value(&ev)))
                    >
                        <option value="">{move || state.with(|app| app.form.category_options.placeholder())}</option>
                        {category_options}
                    </select>
                </div>

                <div>
                    <label for="product">{move || layout.get().product_label}</label>
                    <select
                        id="product"
                        class:hidden=move || !layout.get().show_catalog
                        required=move || layout.get().catalog_required
                        disabled=move || state.with(|app| !app.form.product_enabled)
                        prop:value=move || state.with(|app| app.form.product.clone())
                        on:change=move |ev| send(FormEvent::ProductChanged(event_target_value(&ev)))
                    >
                        <option value="">{PRODUCT_PROMPT}</option>
                        {product_options}
                    </select>
                    <input
                        id="manualInput"
                        type="text"
                        class:hidden=move || !layout.get().show_reason
                        required=move || layout.get().reason_required
                        prop:value=move || state.with(|app| app.form.reason.clone())
                        on:input=move |ev| send(FormEvent::ReasonEdited(event_target_value(&ev)))
                    />
                    <StockIndicator badge=Signal::derive(move || state.with(|app| app.form.badge.clone())) />
                </div>

                <div>
                    <label for="qty">{move || layout.get().qty_label}</label>
                    <input
                        id="qty"
                        type="number"
                        step="any"
                        inputmode="decimal"
                        required
                        prop:value=move || state.with(|app| app.form.qty.clone())
                        on:input=move |ev| send(FormEvent::QtyEdited(event_target_value(&ev)))
                    />
                </div>

                <button type="submit" disabled=move || state.with(|app| app.form.submitting)>
                    {move || state.with(|app| app.form.submit_label())}
                </button>
            </form>
        </Section>
    }
}
