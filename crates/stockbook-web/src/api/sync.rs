//! Network sequences run against the app signal
//!
//! The core splits submit and refresh into synchronous steps; these
//! functions run the requests in between and keep the ordering: the submit
//! notice is shown before the follow-up refresh is issued.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::CONFIG;
use stockbook_core::constants::NOTICE_DURATION_MS;
use stockbook_core::{AppState, NoticeId, fetch_snapshot, send_transaction};

use super::BrowserTransport;

/// Fetch a fresh snapshot in the background
pub fn spawn_refresh(state: RwSignal<AppState>) {
    spawn_local(refresh(state));
}

async fn refresh(state: RwSignal<AppState>) {
    // Taken before the request goes out
    let Some(ticket) = state.try_update(AppState::begin_refresh) else {
        return;
    };
    let result = fetch_snapshot(&BrowserTransport, CONFIG.endpoint).await;
    if let Some(notice) = state.try_update(|app| app.apply_refresh(ticket, result)).flatten() {
        dismiss_later(state, notice);
    }
}

/// Submit the form. A no-op while a previous submit is still in flight.
pub fn spawn_submit(state: RwSignal<AppState>) {
    let Some(Ok(draft)) = state.try_update(AppState::begin_submit) else {
        return;
    };

    spawn_local(async move {
        let result = send_transaction(&BrowserTransport, CONFIG.endpoint, &draft).await;
        let Some(outcome) = state.try_update(|app| app.finish_submit(result)) else {
            return;
        };
        dismiss_later(state, outcome.notice);

        if outcome.refresh {
            refresh(state).await;
        }
    });
}

fn dismiss_later(state: RwSignal<AppState>, notice: NoticeId) {
    Timeout::new(NOTICE_DURATION_MS, move || {
        state.try_update(|app| app.notices.dismiss(notice));
    })
    .forget();
}
