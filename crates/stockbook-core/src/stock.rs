//! Stock badge shown next to the product picker

use crate::constants::LOW_STOCK_THRESHOLD;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Out,
    Low,
    Good,
}

impl StockStatus {
    pub fn classify(level: f64) -> Self {
        if level <= 0.0 {
            StockStatus::Out
        } else if level <= LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Good
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::Out => "out-stock",
            StockStatus::Low => "low-stock",
            StockStatus::Good => "good-stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockBadge {
    pub level: f64,
    pub status: StockStatus,
}

impl StockBadge {
    /// Badge for a selected product; `None` hides the badge
    pub fn for_product(snapshot: &Snapshot, product: &str) -> Option<Self> {
        if product.is_empty() {
            return None;
        }
        let level = snapshot.stock_level(product)?;
        Some(Self {
            level,
            status: StockStatus::classify(level),
        })
    }

    pub fn label(&self) -> String {
        let suffix = match self.status {
            StockStatus::Out => " (OUT)",
            StockStatus::Low => " (LOW)",
            StockStatus::Good => "",
        };
        format!("Stock: {}{}", self.level, suffix)
    }
}
