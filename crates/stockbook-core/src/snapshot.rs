//! Snapshot of the remote spreadsheet: catalog, stock and analytics
//!
//! The sheet is hand-maintained, so every field is optional and numbers may
//! arrive as numbers, numeric strings or nulls. Parsing never rejects a
//! payload for a missing or oddly typed field; it only fails when the body
//! is not a JSON object.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Complete copy of the remote data, replaced wholesale on every fetch
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Category → products, in sheet order
    #[serde(deserialize_with = "catalog")]
    pub categories: HashMap<String, Vec<String>>,
    /// Product → raw stock cell
    #[serde(deserialize_with = "lenient")]
    pub stock_levels: HashMap<String, Value>,
    pub analytics: Option<Analytics>,
    #[serde(deserialize_with = "lenient")]
    pub valuation: Option<Valuation>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// A catalog has arrived at least once
    pub fn is_loaded(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Products of a category; unknown categories have none
    pub fn products_for(&self, category: &str) -> &[String] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Current stock for a product, `None` when the sheet has no usable figure
    pub fn stock_level(&self, product: &str) -> Option<f64> {
        self.stock_levels.get(product).and_then(value_as_f64)
    }

    pub fn product_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Aggregate report computed by the sheet
#[derive(Debug, Clone, Default)]
pub struct Analytics {
    /// Current-period totals, as sent at the top level of `analytics`
    pub current: PeriodRecord,
    /// Month-over-month change, in percent
    pub mom: Option<Comparison>,
    /// Year-over-year change, in percent
    pub yoy: Option<Comparison>,
    pub ytd: Option<Totals>,
    pub monthly_records: Vec<PeriodRecord>,
    pub yearly_records: Vec<PeriodRecord>,
    pub history: Vec<HistoryPoint>,
}

/// Everything in `analytics` that is not a current-period total
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct AnalyticsExtras {
    #[serde(deserialize_with = "lenient")]
    mom: Option<Comparison>,
    #[serde(deserialize_with = "lenient")]
    yoy: Option<Comparison>,
    #[serde(deserialize_with = "lenient")]
    ytd: Option<Totals>,
    #[serde(deserialize_with = "list")]
    monthly_records: Vec<PeriodRecord>,
    #[serde(deserialize_with = "list")]
    yearly_records: Vec<PeriodRecord>,
    #[serde(deserialize_with = "list")]
    history: Vec<HistoryPoint>,
}

impl<'de> Deserialize<'de> for Analytics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The same object carries both the totals and the extras, so read it twice
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(Self::default());
        }

        let current = PeriodRecord::deserialize(&value).map_err(de::Error::custom)?;
        let extras = AnalyticsExtras::deserialize(&value).map_err(de::Error::custom)?;

        Ok(Self {
            current,
            mom: extras.mom,
            yoy: extras.yoy,
            ytd: extras.ytd,
            monthly_records: extras.monthly_records,
            yearly_records: extras.yearly_records,
            history: extras.history,
        })
    }
}

/// Totals and rankings for one month, one year, or the current period
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodRecord {
    #[serde(deserialize_with = "text")]
    pub label: String,
    #[serde(deserialize_with = "number")]
    pub revenue: f64,
    #[serde(deserialize_with = "number")]
    pub profit: f64,
    #[serde(deserialize_with = "number")]
    pub gross: f64,
    #[serde(deserialize_with = "number")]
    pub net: f64,
    #[serde(deserialize_with = "number")]
    pub expenses: f64,
    /// Revenue from walk-in customers
    #[serde(deserialize_with = "number")]
    pub retail: f64,
    /// Revenue from resellers
    #[serde(deserialize_with = "number")]
    pub reseller: f64,
    #[serde(alias = "topByRevenue", deserialize_with = "list")]
    pub top_revenue: Vec<LeaderEntry>,
    #[serde(alias = "topByProfit", deserialize_with = "list")]
    pub top_profit: Vec<LeaderEntry>,
    #[serde(alias = "topByQty", alias = "topByQuantity", deserialize_with = "list")]
    pub top_qty: Vec<LeaderEntry>,
}

/// Period-over-period deltas
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Comparison {
    #[serde(deserialize_with = "optional_number")]
    pub revenue: Option<f64>,
    #[serde(deserialize_with = "optional_number")]
    pub profit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Totals {
    #[serde(deserialize_with = "number")]
    pub revenue: f64,
    #[serde(deserialize_with = "number")]
    pub profit: f64,
    #[serde(deserialize_with = "number")]
    pub expenses: f64,
}

/// One point of the trend series
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryPoint {
    #[serde(deserialize_with = "text")]
    pub label: String,
    #[serde(deserialize_with = "number")]
    pub revenue: f64,
    #[serde(deserialize_with = "number")]
    pub profit: f64,
}

/// Stock on hand priced three ways
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Valuation {
    #[serde(deserialize_with = "number")]
    pub cost: f64,
    #[serde(deserialize_with = "number")]
    pub retail: f64,
    #[serde(deserialize_with = "number")]
    pub reseller: f64,
}

/// Pre-ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawLeaderEntry")]
pub struct LeaderEntry {
    pub name: String,
    pub value: f64,
}

/// Rows come either as `["Rice 5kg", 120]` or as objects
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLeaderEntry {
    Pair(Value, Value),
    Named {
        #[serde(alias = "product")]
        name: Value,
        #[serde(
            alias = "qty",
            alias = "quantity",
            alias = "profit",
            alias = "revenue",
            alias = "amount",
            default
        )]
        value: Value,
    },
}

impl TryFrom<RawLeaderEntry> for LeaderEntry {
    type Error = &'static str;

    fn try_from(raw: RawLeaderEntry) -> Result<Self, Self::Error> {
        let (name, value) = match raw {
            RawLeaderEntry::Pair(name, value) => (name, value),
            RawLeaderEntry::Named { name, value } => (name, value),
        };
        Ok(Self {
            name: value_as_name(&name).ok_or("leaderboard row without a name")?,
            value: value_as_f64(&value).unwrap_or(0.0),
        })
    }
}

// =============================================================================
// Lenient field parsers
// =============================================================================

/// Read a sheet cell as a number: JSON numbers, or strings like "1,200"
pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn value_as_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Any value that does not fit `T` becomes `T::default()`
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}

/// Arrays keep the items that parse; anything else is an empty list
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect(),
        _ => Vec::new(),
    })
}

/// Text cell; numbers such as a year become their digits
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_as_name)
        .unwrap_or_default())
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(optional_number(deserializer)?.unwrap_or(0.0))
}

fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(value_as_f64))
}

/// Category lists with blank cells dropped and numeric product codes kept as text
fn catalog<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<String, Vec<String>>, D::Error> {
    let Some(Value::Object(raw)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(HashMap::new());
    };

    Ok(raw
        .into_iter()
        .map(|(category, items)| {
            let products = match items {
                Value::Array(items) => items.iter().filter_map(value_as_name).collect(),
                _ => Vec::new(),
            };
            (category, products)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(!snapshot.is_loaded());
        assert!(snapshot.analytics.is_none());
        assert!(snapshot.valuation.is_none());
    }

    #[test]
    fn test_nulls_are_tolerated() {
        let snapshot =
            Snapshot::from_json(r#"{"categories": null, "stockLevels": null, "analytics": null}"#).unwrap();
        assert!(snapshot.categories.is_empty());
        assert!(snapshot.stock_levels.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Snapshot::from_json("<html>moved</html>").is_err());
    }

    #[test]
    fn test_catalog_keeps_sheet_order_and_drops_blanks() {
        let snapshot =
            Snapshot::from_json(r#"{"categories": {"Drinks": ["Water", "", null, "Cola", 7]}}"#).unwrap();
        assert_eq!(snapshot.products_for("Drinks"), ["Water", "Cola", "7"]);
        assert_eq!(snapshot.product_count(), 3);
    }

    #[test]
    fn test_unknown_category_has_no_products() {
        let snapshot = Snapshot::from_json(r#"{"categories": {"Drinks": ["Water"]}}"#).unwrap();
        assert!(snapshot.products_for("Snacks").is_empty());
    }

    #[test]
    fn test_stock_level_variants() {
        let snapshot = Snapshot::from_json(
            r#"{"stockLevels": {"Water": 12, "Cola": "3", "Juice": "", "Tea": null, "Milk": "1,250"}}"#,
        )
        .unwrap();
        assert_eq!(snapshot.stock_level("Water"), Some(12.0));
        assert_eq!(snapshot.stock_level("Cola"), Some(3.0));
        assert_eq!(snapshot.stock_level("Milk"), Some(1250.0));
        assert_eq!(snapshot.stock_level("Juice"), None);
        assert_eq!(snapshot.stock_level("Tea"), None);
        assert_eq!(snapshot.stock_level("Bread"), None);
    }

    #[test]
    fn test_analytics_top_level_is_current_period() {
        let snapshot = Snapshot::from_json(
            r#"{"analytics": {
                "revenue": 1000, "profit": "250", "expenses": 40,
                "mom": {"revenue": 12.5},
                "topByRevenue": [["Rice", 500], {"name": "Beans", "value": 300}],
                "topQty": [{"product": "Water", "qty": "42"}],
                "monthlyRecords": [{"label": "Jan", "revenue": 10}],
                "history": [{"label": "Jan", "revenue": 10, "profit": 2}]
            }}"#,
        )
        .unwrap();

        let analytics = snapshot.analytics.unwrap();
        assert_eq!(analytics.current.revenue, 1000.0);
        assert_eq!(analytics.current.profit, 250.0);
        assert_eq!(analytics.current.gross, 0.0);
        assert_eq!(analytics.mom.unwrap().revenue, Some(12.5));
        assert!(analytics.yoy.is_none());
        assert_eq!(analytics.current.top_revenue[0], LeaderEntry { name: "Rice".into(), value: 500.0 });
        assert_eq!(analytics.current.top_revenue[1].name, "Beans");
        assert_eq!(analytics.current.top_qty[0], LeaderEntry { name: "Water".into(), value: 42.0 });
        assert_eq!(analytics.monthly_records.len(), 1);
        assert!(analytics.yearly_records.is_empty());
        assert_eq!(analytics.history[0].profit, 2.0);
    }

    #[test]
    fn test_non_object_analytics_is_empty() {
        let snapshot = Snapshot::from_json(r#"{"analytics": "not ready"}"#).unwrap();
        let analytics = snapshot.analytics.unwrap();
        assert_eq!(analytics.current.revenue, 0.0);
        assert!(analytics.history.is_empty());
    }

    #[test]
    fn test_valuation() {
        let snapshot =
            Snapshot::from_json(r#"{"valuation": {"cost": 5000, "retail": "7500.5", "reseller": null}}"#).unwrap();
        let valuation = snapshot.valuation.unwrap();
        assert_eq!(valuation.cost, 5000.0);
        assert_eq!(valuation.retail, 7500.5);
        assert_eq!(valuation.reseller, 0.0);
    }

    fn with_catalog(analytics_and_valuation: &str) -> Snapshot {
        let json = format!(r#"{{"categories": {{"Drinks": ["Water"]}}, {analytics_and_valuation}}}"#);
        Snapshot::from_json(&json).unwrap()
    }

    #[test]
    fn test_numeric_labels_become_text() {
        let snapshot = with_catalog(
            r#""analytics": {
                "yearlyRecords": [{"label": 2024, "revenue": 100}],
                "history": [{"label": 2023, "revenue": 80}, {"label": true, "revenue": 5}]
            }"#,
        );
        assert_eq!(snapshot.products_for("Drinks"), ["Water"]);

        let analytics = snapshot.analytics.unwrap();
        assert_eq!(analytics.yearly_records[0].label, "2024");
        assert_eq!(analytics.yearly_records[0].revenue, 100.0);
        assert_eq!(analytics.history[0].label, "2023");
        assert_eq!(analytics.history[1].label, "");
    }

    #[test]
    fn test_leaderboard_numeric_codes_and_bad_rows() {
        let snapshot = with_catalog(r#""analytics": {"topQty": [[7, 12], "junk", {"value": 3}, {"product": "Tea", "qty": 2}]}"#);
        let top_qty = snapshot.analytics.unwrap().current.top_qty;
        assert_eq!(
            top_qty,
            [
                LeaderEntry { name: "7".into(), value: 12.0 },
                LeaderEntry { name: "Tea".into(), value: 2.0 },
            ]
        );
    }

    #[test]
    fn test_odd_shapes_keep_the_catalog() {
        let snapshot = with_catalog(
            r#""valuation": "n/a",
               "analytics": {
                   "revenue": 10,
                   "mom": "n/a", "yoy": 4, "ytd": "soon",
                   "monthlyRecords": {"Jan": 1},
                   "yearlyRecords": [3, {"label": "2025", "revenue": 7}],
                   "topProfit": "none"
               }"#,
        );
        assert!(snapshot.is_loaded());
        assert!(snapshot.valuation.is_none());

        let analytics = snapshot.analytics.unwrap();
        assert_eq!(analytics.current.revenue, 10.0);
        assert!(analytics.mom.is_none());
        assert!(analytics.yoy.is_none());
        assert!(analytics.ytd.is_none());
        assert!(analytics.monthly_records.is_empty());
        assert_eq!(analytics.yearly_records.len(), 1);
        assert_eq!(analytics.yearly_records[0].label, "2025");
        assert!(analytics.current.top_profit.is_empty());
    }

    #[test]
    fn test_odd_catalog_shapes() {
        let snapshot = Snapshot::from_json(r#"{"categories": {"Drinks": "Water", "Snacks": ["Chips"]}, "stockLevels": 3}"#).unwrap();
        assert!(snapshot.products_for("Drinks").is_empty());
        assert_eq!(snapshot.products_for("Snacks"), ["Chips"]);
        assert!(snapshot.stock_levels.is_empty());

        let snapshot = Snapshot::from_json(r#"{"categories": "loading", "stockLevels": {"Chips": 4}}"#).unwrap();
        assert!(!snapshot.is_loaded());
        assert_eq!(snapshot.stock_level("Chips"), Some(4.0));
    }
}
