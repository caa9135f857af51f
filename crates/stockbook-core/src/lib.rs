//! Stockbook core
//!
//! Browser-free state for the Stockbook sales log: the snapshot store, the
//! entry form and dashboard controllers, the PIN gate and the wire format.
//! Handlers are plain `(state, event) -> state` functions; HTTP goes
//! through the [`Transport`] trait so the web crate can plug in the
//! browser's fetch.

pub mod app;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod format;
pub mod notice;
pub mod snapshot;
pub mod staff;
pub mod stock;
pub mod store;
pub mod transaction;

#[cfg(test)]
mod testing;

pub use app::{AppState, SubmitOutcome};
pub use dashboard::{DashboardState, DashboardView, PeriodKind, ViewMode};
pub use error::{SubmitBlocked, SubmitError, SyncError, TransportError};
pub use form::{CategoryOptions, FieldLayout, FormEvent, FormState};
pub use notice::{Notice, NoticeId, NoticeKind};
pub use snapshot::Snapshot;
pub use staff::{Access, StaffIdentity};
pub use stock::{StockBadge, StockStatus};
pub use store::{HttpReply, RefreshTicket, SnapshotStore, Transport, fetch_snapshot};
pub use transaction::{SaleType, TransactionDraft, send_transaction};
