use leptos::prelude::*;
use shared::CONFIG;
use stockbook_core::dashboard::period_labels;
use stockbook_core::format::{format_delta, format_money};
use stockbook_core::{AppState, DashboardView, PeriodKind};

use crate::components::{Kpi, Leaderboard, Section, SplitBar, TrendChart};

fn money(value: f64) -> String {
    format_money(value, CONFIG.currency)
}

/// Analytics view: period picker, KPI cards, charts, leaderboards
#[component]
pub fn DashboardPage(state: RwSignal<AppState>) -> impl IntoView {
    let dashboard = Memo::new(move |_| state.with(|app| app.dashboard_view()));

    let kind_tab = move |kind: PeriodKind| {
        view! {
            <button
                type="button"
                class="tab"
                class:active=move || state.with(|app| app.dashboard.kind == kind)
                on:click=move |_| state.update(|app| app.select_kind(kind))
            >
                {kind.label()}
            </button>
        }
    };

    view! {
        <div>
            <div class="flex gap-2 mb-4">
                {PeriodKind::ALL.into_iter().map(kind_tab).collect_view()}
                {PeriodKind::ALL.into_iter().map(|kind| view! { <PeriodPicker state=state kind=kind /> }).collect_view()}
            </div>

            {move || match dashboard.get() {
                Some(data) => view! { <DashboardContent data=data /> }.into_any(),
                None => view! {
                    <div class="text-[var(--ink-light)]">"Analytics unavailable. Waiting for the sheet to sync."</div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Record picker for one granularity; hidden while the other one is active
#[component]
fn PeriodPicker(state: RwSignal<AppState>, kind: PeriodKind) -> impl IntoView {
    let labels = Memo::new(move |_| {
        state.with(|app| {
            app.snapshot()
                .analytics
                .as_ref()
                .map(|analytics| period_labels(analytics, kind))
                .unwrap_or_default()
        })
    });

    let hidden = move || state.with(|app| app.dashboard.kind != kind) || labels.with(Vec::is_empty);

    let selected = move || {
        state.with(|app| {
            app.snapshot()
                .analytics
                .as_ref()
                .and_then(|analytics| app.dashboard.select_kind(kind).selected_index(analytics))
                .map(|i| i.to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <select
            class:hidden=hidden
            prop:value=selected
            on:change=move |ev| {
                if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                    state.update(|app| app.select_period(kind, index));
                }
            }
        >
            {move || {
                labels
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| view! { <option value=i.to_string()>{label}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
fn DashboardContent(data: DashboardView) -> impl IntoView {
    let DashboardView {
        period_label,
        revenue,
        net,
        gross,
        expenses,
        margin,
        valuation,
        mom,
        yoy,
        ytd,
        trend,
        distribution,
        top_profit,
        top_qty,
    } = data;

    let revenue_hint = format!(
        "MoM {} · YoY {}",
        format_delta(mom.as_ref().and_then(|c| c.revenue)),
        format_delta(yoy.as_ref().and_then(|c| c.revenue))
    );
    let profit_hint = format!(
        "MoM {} · YoY {}",
        format_delta(mom.as_ref().and_then(|c| c.profit)),
        format_delta(yoy.as_ref().and_then(|c| c.profit))
    );

    view! {
        <Section id="summary" title="Summary" note=period_label>
            <div class="grid grid-cols-2 gap-3">
                <Kpi label="Revenue" value=money(revenue) hint=revenue_hint />
                <Kpi label="Net" value=money(net) hint=profit_hint />
                <Kpi label="Gross" value=money(gross) />
                <Kpi label="Expenses" value=money(expenses) />
                <Kpi label="Margin" value=margin />
                {ytd.map(|ytd| view! {
                    <Kpi label="Year to date" value=money(ytd.revenue) hint=format!("profit {}", money(ytd.profit)) />
                })}
            </div>
        </Section>

        {valuation.map(|valuation| view! {
            <Section id="valuation" title="Stock value">
                <div class="grid grid-cols-2 gap-3">
                    <Kpi label="At cost" value=money(valuation.cost) />
                    <Kpi label="At retail" value=money(valuation.retail) />
                </div>
            </Section>
        })}

        <Section id="trend" title="Trend">
            <TrendChart points=trend />
        </Section>

        <Section id="split" title="Retail vs reseller">
            <SplitBar distribution=distribution />
        </Section>

        <Section id="leaders" title="Leaderboards">
            <div class="grid grid-cols-2 gap-6">
                <Leaderboard title="Top by profit" entries=top_profit money=true />
                <Leaderboard title="Top by quantity" entries=top_qty />
            </div>
        </Section>
    }
}
