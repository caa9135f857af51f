//! Remote snapshot store
//!
//! Holds the one authoritative copy of the sheet data. A refresh either
//! swaps in a complete new snapshot or leaves the old one untouched; there
//! is no merging and no retry. Each fetch carries a ticket taken when it is
//! issued, so a reply that lands after a newer one has been applied is dropped.

use std::sync::Arc;

use crate::error::{SyncError, TransportError};
use crate::snapshot::Snapshot;

/// Raw HTTP answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam between the controllers and the browser.
///
/// The app is single-threaded (WASM), so futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;
    async fn post(&self, url: &str, body: String) -> Result<HttpReply, TransportError>;
}

/// Issue order of a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Single-writer cell around the current snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Arc<Snapshot>,
    generation: u64,
    issued: u64,
    applied: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only handle to the current snapshot
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    /// Number of successful replacements so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take a ticket before sending a fetch
    pub fn issue(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// A reply for `ticket` is older than the snapshot already in place
    pub fn is_stale(&self, ticket: RefreshTicket) -> bool {
        ticket.0 <= self.applied
    }

    /// Swap in a new snapshot. Handles taken earlier keep seeing the old one.
    /// Returns `None` and keeps the current snapshot when the reply is stale.
    pub fn replace(&mut self, ticket: RefreshTicket, snapshot: Snapshot) -> Option<Arc<Snapshot>> {
        if self.is_stale(ticket) {
            log::debug!("Dropping fetch #{}, #{} already applied", ticket.0, self.applied);
            return None;
        }

        self.current = Arc::new(snapshot);
        self.applied = ticket.0;
        self.generation += 1;
        log::debug!(
            "Snapshot #{} (fetch #{}): {} categories, {} products, {} stock levels",
            self.generation,
            ticket.0,
            self.current.categories.len(),
            self.current.product_count(),
            self.current.stock_levels.len()
        );
        Some(self.current())
    }
}

/// Interpret a read reply
pub fn parse_reply(reply: &HttpReply) -> Result<Snapshot, SyncError> {
    if !reply.is_success() {
        return Err(SyncError::Status(reply.status));
    }
    Ok(Snapshot::from_json(&reply.body)?)
}

/// GET the endpoint and parse the snapshot
pub async fn fetch_snapshot<T: Transport>(transport: &T, endpoint: &str) -> Result<Snapshot, SyncError> {
    let reply = transport.get(endpoint).await?;
    parse_reply(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, ok};
    use futures::executor::block_on;

    #[test]
    fn test_replace_bumps_generation_and_keeps_old_handles() {
        let mut store = SnapshotStore::new();
        assert_eq!(store.generation(), 0);
        assert!(!store.snapshot().is_loaded());

        let before = store.current();
        let ticket = store.issue();
        assert!(store.replace(ticket, Snapshot::from_json(r#"{"categories": {"Drinks": ["Water"]}}"#).unwrap()).is_some());

        assert_eq!(store.generation(), 1);
        assert!(store.snapshot().is_loaded());
        // Stale reader still sees the old value until it re-reads
        assert!(!before.is_loaded());
    }

    #[test]
    fn test_late_reply_for_older_fetch_is_dropped() {
        let mut store = SnapshotStore::new();
        let older = store.issue();
        let newer = store.issue();

        let fresh = Snapshot::from_json(r#"{"stockLevels": {"Cola": 4}}"#).unwrap();
        let stale = Snapshot::from_json(r#"{"stockLevels": {"Cola": 9}}"#).unwrap();

        assert!(store.replace(newer, fresh).is_some());
        assert!(store.is_stale(older));
        assert!(store.replace(older, stale).is_none());
        assert_eq!(store.generation(), 1);
        assert_eq!(store.snapshot().stock_level("Cola"), Some(4.0));

        // In-order replies still apply
        let next = store.issue();
        assert!(!store.is_stale(next));
        assert!(store.replace(next, Snapshot::default()).is_some());
        assert_eq!(store.generation(), 2);
    }

    #[test]
    fn test_parse_reply_rejects_error_status() {
        let reply = HttpReply {
            status: 500,
            body: "{}".into(),
        };
        assert!(matches!(parse_reply(&reply), Err(SyncError::Status(500))));
    }

    #[test]
    fn test_parse_reply_rejects_non_json() {
        let reply = ok("<!DOCTYPE html>");
        assert!(matches!(parse_reply(&reply), Err(SyncError::Parse(_))));
    }

    #[test]
    fn test_fetch_snapshot() {
        let transport = MockTransport::new().on_get(Ok(ok(r#"{"categories": {"Drinks": ["Water"]}}"#)));
        let snapshot = block_on(fetch_snapshot(&transport, "https://sheet.test/exec")).unwrap();
        assert_eq!(snapshot.products_for("Drinks"), ["Water"]);
        assert_eq!(transport.calls(), ["GET https://sheet.test/exec"]);
    }

    #[test]
    fn test_fetch_snapshot_network_failure() {
        let transport = MockTransport::new().on_get(Err(TransportError::Network("offline".into())));
        let result = block_on(fetch_snapshot(&transport, "https://sheet.test/exec"));
        assert!(matches!(result, Err(SyncError::Transport(_))));
    }
}
