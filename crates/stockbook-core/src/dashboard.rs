//! Analytics dashboard controller
//!
//! The sheet does all aggregation and ranking. This module only picks a
//! period, derives the margin, and caps the leaderboards for display.

use crate::constants::LEADERBOARD_SIZE;
use crate::format::format_percent;
use crate::snapshot::{Analytics, Comparison, HistoryPoint, LeaderEntry, PeriodRecord, Totals, Valuation};

/// Which top-level view is visible. Hidden views keep their state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Entry,
    Dashboard,
}

/// Dashboard granularity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PeriodKind {
    #[default]
    Monthly,
    Yearly,
}

impl PeriodKind {
    pub const ALL: [PeriodKind; 2] = [PeriodKind::Monthly, PeriodKind::Yearly];

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            PeriodKind::Monthly => "Monthly",
            PeriodKind::Yearly => "Yearly",
        }
    }
}

/// Records of one granularity, in sheet order
pub fn records_for(analytics: &Analytics, kind: PeriodKind) -> &[PeriodRecord] {
    match kind {
        PeriodKind::Monthly => &analytics.monthly_records,
        PeriodKind::Yearly => &analytics.yearly_records,
    }
}

/// Picker labels; unlabeled records get their position
pub fn period_labels(analytics: &Analytics, kind: PeriodKind) -> Vec<String> {
    records_for(analytics, kind)
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if record.label.is_empty() {
                format!("#{}", i + 1)
            } else {
                record.label.clone()
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub kind: PeriodKind,
    /// `None` follows the most recent record
    monthly: Option<usize>,
    yearly: Option<usize>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch granularity, keeping each picker's own selection
    pub fn select_kind(self, kind: PeriodKind) -> Self {
        Self { kind, ..self }
    }

    /// Select record `index` of `kind` and show that kind's picker
    pub fn select_period(mut self, kind: PeriodKind, index: usize) -> Self {
        match kind {
            PeriodKind::Monthly => self.monthly = Some(index),
            PeriodKind::Yearly => self.yearly = Some(index),
        }
        self.kind = kind;
        self
    }

    pub fn shows_monthly_picker(&self) -> bool {
        self.kind == PeriodKind::Monthly
    }

    pub fn shows_yearly_picker(&self) -> bool {
        self.kind == PeriodKind::Yearly
    }

    /// Index into the active kind's records, clamped; `None` when there are none
    pub fn selected_index(&self, analytics: &Analytics) -> Option<usize> {
        let last = records_for(analytics, self.kind).len().checked_sub(1)?;
        let chosen = match self.kind {
            PeriodKind::Monthly => self.monthly,
            PeriodKind::Yearly => self.yearly,
        };
        Some(chosen.map_or(last, |i| i.min(last)))
    }

    /// Selected record, or the current-period totals when the sheet sent no records of this kind
    pub fn selected_record<'a>(&self, analytics: &'a Analytics) -> &'a PeriodRecord {
        match self.selected_index(analytics) {
            Some(i) => &records_for(analytics, self.kind)[i],
            None => &analytics.current,
        }
    }
}

/// Profit as a share of revenue, 0 when there is no revenue
pub fn margin_percent(profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 || !revenue.is_finite() || !profit.is_finite() {
        return 0.0;
    }
    profit / revenue * 100.0
}

pub fn format_margin(profit: f64, revenue: f64) -> String {
    if revenue == 0.0 || !revenue.is_finite() {
        return "0%".to_string();
    }
    format_percent(margin_percent(profit, revenue), 1)
}

/// Retail vs reseller revenue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    pub retail: f64,
    pub reseller: f64,
}

impl Distribution {
    pub fn total(&self) -> f64 {
        self.retail + self.reseller
    }

    /// Percent shares; both 0 when nothing was sold
    pub fn shares(&self) -> (f64, f64) {
        let total = self.total();
        if total <= 0.0 {
            return (0.0, 0.0);
        }
        (self.retail / total * 100.0, self.reseller / total * 100.0)
    }
}

/// Everything the dashboard shows for one period
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub period_label: String,
    pub revenue: f64,
    pub net: f64,
    pub gross: f64,
    pub expenses: f64,
    pub margin: String,
    /// Store-wide, not tied to the period
    pub valuation: Option<Valuation>,
    pub mom: Option<Comparison>,
    pub yoy: Option<Comparison>,
    pub ytd: Option<Totals>,
    pub trend: Vec<HistoryPoint>,
    pub distribution: Distribution,
    pub top_profit: Vec<LeaderEntry>,
    pub top_qty: Vec<LeaderEntry>,
}

impl DashboardView {
    pub fn render(record: &PeriodRecord, analytics: &Analytics, valuation: Option<&Valuation>) -> Self {
        // Older sheets only rank by revenue
        let profit_board = if record.top_profit.is_empty() {
            &record.top_revenue
        } else {
            &record.top_profit
        };

        Self {
            period_label: record.label.clone(),
            revenue: record.revenue,
            net: record.net,
            gross: record.gross,
            expenses: record.expenses,
            margin: format_margin(record.profit, record.revenue),
            valuation: valuation.cloned(),
            mom: analytics.mom.clone(),
            yoy: analytics.yoy.clone(),
            ytd: analytics.ytd.clone(),
            trend: analytics.history.clone(),
            distribution: Distribution {
                retail: record.retail,
                reseller: record.reseller,
            },
            top_profit: leaderboard(profit_board),
            top_qty: leaderboard(&record.top_qty),
        }
    }
}

/// Server order, capped
fn leaderboard(entries: &[LeaderEntry]) -> Vec<LeaderEntry> {
    entries.iter().take(LEADERBOARD_SIZE).cloned().collect()
}
