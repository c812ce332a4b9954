//! Application-wide context handed down through Dioxus.
//!
//! The session store and the notification slot are provided once by `App`
//! and read by pages through the hooks below; nothing here is a global.

use crate::client::{BlogClientWeb, api_config};
use crate::storage::LocalStorageSession;
use crate::Route;
use dioxus::prelude::*;
use inkwell_client::pages::Outcome;
use inkwell_client::{Notice, SessionStore};

pub type SessionSignal = Signal<SessionStore<LocalStorageSession>>;

pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

/// API client carrying the current session's access token, if any.
pub fn api_client(session: &SessionStore<LocalStorageSession>) -> BlogClientWeb {
    BlogClientWeb::new(api_config()).with_token(session.access_token())
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingNotice {
    pub notice: Notice,
    pub then: Option<Route>,
}

/// Single slot for the blocking notification dialog.
#[derive(Clone, Copy)]
pub struct Notifier {
    pending: Signal<Option<PendingNotice>>,
}

impl Notifier {
    pub fn new(pending: Signal<Option<PendingNotice>>) -> Self {
        Self { pending }
    }

    pub fn show(mut self, notice: Notice) {
        self.pending.set(Some(PendingNotice { notice, then: None }));
    }

    /// Shows the outcome's notice; its route is followed once dismissed.
    pub fn outcome(mut self, outcome: Outcome) {
        self.pending.set(Some(PendingNotice {
            notice: outcome.notice,
            then: outcome.navigate.map(Route::from),
        }));
    }

    pub fn pending(&self) -> Option<PendingNotice> {
        self.pending.read().clone()
    }

    pub fn dismiss(mut self) -> Option<Route> {
        self.pending.write().take().and_then(|p| p.then)
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}
