//! Whole-app state and the submit / refresh sequences
//!
//! The view layer owns one `AppState`. Synchronous steps (`begin_submit`,
//! `finish_submit`, `begin_refresh`, `apply_refresh`) are split out so a UI can run the
//! network calls itself; `submit` and `refresh` chain them for callers that
//! can hold `&mut self` across the await.

use shared::{Config, StaffEntry};

use crate::constants::{SUBMIT_FAILED_MESSAGE, SUBMIT_OK_MESSAGE, SYNC_FAILED_MESSAGE};
use crate::dashboard::{DashboardState, DashboardView, PeriodKind, ViewMode};
use crate::error::{SubmitBlocked, SubmitError, SyncError};
use crate::form::{FormEvent, FormState};
use crate::notice::{NoticeId, NoticeKind, Notices};
use crate::snapshot::Snapshot;
use crate::staff::Access;
use crate::store::{RefreshTicket, SnapshotStore, Transport, fetch_snapshot};
use crate::transaction::{TransactionDraft, send_transaction};

/// Result of settling a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: NoticeId,
    /// The write went through and the snapshot should be re-fetched
    pub refresh: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SnapshotStore,
    pub form: FormState,
    pub dashboard: DashboardState,
    pub view: ViewMode,
    pub access: Access,
    pub notices: Notices,
    dashboard_enabled: bool,
    valuation_enabled: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: SnapshotStore::new(),
            form: FormState::new(),
            dashboard: DashboardState::new(),
            view: ViewMode::Entry,
            access: Access::new(config.features.staff_gate),
            notices: Notices::default(),
            dashboard_enabled: config.features.dashboard,
            valuation_enabled: config.features.valuation,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.store.snapshot()
    }

    pub fn dashboard_enabled(&self) -> bool {
        self.dashboard_enabled
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn on_form_event(&mut self, event: FormEvent) {
        let snapshot = self.store.current();
        self.form = std::mem::take(&mut self.form).apply(event, &snapshot);
    }

    pub fn enter_pin(&mut self, table: &[StaffEntry], pin: &str) {
        let access = std::mem::replace(&mut self.access, Access::Open);
        self.access = access.enter_pin(table, pin);
    }

    /// Show one view and hide the other; nothing else changes
    pub fn switch_view(&mut self, view: ViewMode) {
        if view == ViewMode::Dashboard && !self.dashboard_enabled {
            return;
        }
        self.view = view;
    }

    pub fn select_kind(&mut self, kind: PeriodKind) {
        self.dashboard = self.dashboard.select_kind(kind);
    }

    pub fn select_period(&mut self, kind: PeriodKind, index: usize) {
        self.dashboard = self.dashboard.select_period(kind, index);
    }

    /// Dashboard contents for the selected period; `None` until analytics arrive
    pub fn dashboard_view(&self) -> Option<DashboardView> {
        let snapshot = self.store.snapshot();
        let analytics = snapshot.analytics.as_ref()?;
        let valuation = snapshot.valuation.as_ref().filter(|_| self.valuation_enabled);
        let record = self.dashboard.selected_record(analytics);
        Some(DashboardView::render(record, analytics, valuation))
    }

    // =========================================================================
    // Submit
    // =========================================================================

    pub fn begin_submit(&mut self) -> Result<TransactionDraft, SubmitBlocked> {
        let staff = self.access.staff_name();
        let result = self.form.begin_submit(staff);
        if let Err(reason) = &result {
            log::warn!("Submit refused: {reason}");
        }
        result
    }

    /// Show the outcome notice and settle the form. A refresh, if any, comes after this.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        let snapshot = self.store.current();
        let succeeded = result.is_ok();

        let notice = match result {
            Ok(()) => self.notices.push(NoticeKind::Success, SUBMIT_OK_MESSAGE),
            Err(err) => {
                log::error!("Submit failed: {err}");
                self.notices.push(NoticeKind::Error, SUBMIT_FAILED_MESSAGE)
            }
        };
        self.form = std::mem::take(&mut self.form).finish_submit(succeeded, &snapshot);

        SubmitOutcome {
            notice,
            refresh: succeeded,
        }
    }

    /// Full sequence: draft, write, notice, then one refresh on success
    pub async fn submit<T: Transport>(&mut self, transport: &T, endpoint: &str) -> Result<SubmitOutcome, SubmitBlocked> {
        let draft = self.begin_submit()?;
        let result = send_transaction(transport, endpoint, &draft).await;
        let outcome = self.finish_submit(result);
        if outcome.refresh {
            self.refresh(transport, endpoint).await;
        }
        Ok(outcome)
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Ticket for a fetch about to be sent
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.store.issue()
    }

    /// Swap in a fetched snapshot, or report the failure and keep the old one.
    /// Replies overtaken by a newer applied fetch are dropped without a notice.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, result: Result<Snapshot, SyncError>) -> Option<NoticeId> {
        if self.store.is_stale(ticket) {
            log::debug!("Ignoring out-of-order fetch reply");
            return None;
        }

        match result {
            Ok(snapshot) => {
                if let Some(snapshot) = self.store.replace(ticket, snapshot) {
                    self.form = std::mem::take(&mut self.form).resync(&snapshot);
                }
                None
            }
            Err(err) => {
                log::error!("Fetch error: {err}");
                Some(self.notices.push(NoticeKind::Error, SYNC_FAILED_MESSAGE))
            }
        }
    }

    pub async fn refresh<T: Transport>(&mut self, transport: &T, endpoint: &str) -> Option<NoticeId> {
        let ticket = self.begin_refresh();
        let result = fetch_snapshot(transport, endpoint).await;
        self.apply_refresh(ticket, result)
    }
}
