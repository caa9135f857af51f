//! Transaction drafts and the write request that carries them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SubmitError;
use crate::store::Transport;

/// Entry mode of the form, and the `saleType` column of the written row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleType {
    #[default]
    Sale,
    Expense,
}

impl SaleType {
    pub const ALL: [SaleType; 2] = [SaleType::Sale, SaleType::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            SaleType::Sale => "Sale",
            SaleType::Expense => "Expense",
        }
    }

    pub fn is_expense(self) -> bool {
        self == SaleType::Expense
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sale" => Ok(SaleType::Sale),
            "Expense" => Ok(SaleType::Expense),
            other => Err(format!("unknown sale type: {other}")),
        }
    }
}

/// One row to append to the sheet. Built at submit time, sent once.
///
/// Serializes to the endpoint's body shape:
/// `{"saleType", "category", "product", "qty", "staff"?}`.
/// `qty` is forwarded exactly as typed; the sheet does its own parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub sale_type: SaleType,
    pub category: String,
    /// Product name, or the free-text reason for an expense
    pub product: String,
    pub qty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<String>,
}

impl TransactionDraft {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// POST the draft. The reply body is ignored: anything that comes back counts as logged.
pub async fn send_transaction<T: Transport>(
    transport: &T,
    endpoint: &str,
    draft: &TransactionDraft,
) -> Result<(), SubmitError> {
    let body = draft.to_json()?;
    let reply = transport.post(endpoint, body).await?;
    log::debug!(
        "Logged {} '{}' x{} (HTTP {})",
        draft.sale_type,
        draft.product,
        draft.qty,
        reply.status
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sale_type_round_trips_through_strings() {
        for sale_type in SaleType::ALL {
            assert_eq!(sale_type.as_str().parse::<SaleType>(), Ok(sale_type));
        }
        assert!("Refund".parse::<SaleType>().is_err());
    }

    #[test]
    fn test_sale_body_shape() {
        let draft = TransactionDraft {
            sale_type: SaleType::Sale,
            category: "Drinks".into(),
            product: "Cola".into(),
            qty: "3".into(),
            staff: None,
        };
        let body: serde_json::Value = serde_json::from_str(&draft.to_json().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"saleType": "Sale", "category": "Drinks", "product": "Cola", "qty": "3"})
        );
    }

    #[test]
    fn test_expense_body_keeps_qty_verbatim_and_stamps_staff() {
        let draft = TransactionDraft {
            sale_type: SaleType::Expense,
            category: "Expense".into(),
            product: "Generator fuel".into(),
            qty: " 1,500 ".into(),
            staff: Some("Front Desk".into()),
        };
        let body: serde_json::Value = serde_json::from_str(&draft.to_json().unwrap()).unwrap();
        assert_eq!(body["saleType"], "Expense");
        assert_eq!(body["category"], "Expense");
        assert_eq!(body["qty"], " 1,500 ");
        assert_eq!(body["staff"], "Front Desk");
    }
}
