//! Minimal inline SVG charts

use leptos::prelude::*;
use stockbook_core::dashboard::Distribution;
use stockbook_core::format::format_percent;
use stockbook_core::snapshot::HistoryPoint;

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 80.0;

/// SVG `points` for a series, scaled into the chart box against a shared range
fn polyline(values: &[f64], min: f64, max: f64) -> String {
    let span = (max - min).max(f64::EPSILON);
    let step = if values.len() > 1 {
        WIDTH / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", i as f64 * step, HEIGHT - (v - min) / span * HEIGHT))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Range over every series, always including zero
fn value_range(series: &[&[f64]]) -> (f64, f64) {
    series
        .iter()
        .flat_map(|s| s.iter().copied())
        .fold((0.0, 0.0), |(lo, hi), v| (f64::min(lo, v), f64::max(hi, v)))
}

/// Revenue and profit over `analytics.history`
#[component]
pub fn TrendChart(points: Vec<HistoryPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <div class="text-sm text-[var(--ink-light)]">"No history yet"</div> }.into_any();
    }

    let revenue: Vec<f64> = points.iter().map(|p| p.revenue).collect();
    let profit: Vec<f64> = points.iter().map(|p| p.profit).collect();
    let (min, max) = value_range(&[revenue.as_slice(), profit.as_slice()]);
    let first = points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.label.clone()).unwrap_or_default();

    view! {
        <div>
            <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="w-full h-20" preserveAspectRatio="none">
                <polyline points=polyline(&revenue, min, max) fill="none" stroke="var(--ink)" stroke-width="1.5" />
                <polyline points=polyline(&profit, min, max) fill="none" stroke="var(--accent)" stroke-width="1.5" />
            </svg>
            <div class="flex justify-between text-sm text-[var(--ink-light)]">
                <span>{first}</span>
                <span>"revenue ━ profit ━"</span>
                <span>{last}</span>
            </div>
        </div>
    }
    .into_any()
}

/// Retail vs reseller share as a split bar
#[component]
pub fn SplitBar(distribution: Distribution) -> impl IntoView {
    let (retail, reseller) = distribution.shares();

    view! {
        <div>
            <div class="flex h-4 border border-[var(--rule)]">
                <div class="bg-[var(--ink)]" style=format!("width: {retail:.1}%")></div>
                <div class="bg-[var(--accent)]" style=format!("width: {reseller:.1}%")></div>
            </div>
            <div class="flex justify-between text-sm">
                <span>"retail " {format_percent(retail, 1)}</span>
                <span>"reseller " {format_percent(reseller, 1)}</span>
            </div>
        </div>
    }
}
