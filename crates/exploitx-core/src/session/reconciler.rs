//! Session reconciler state machine.
//!
//! Pure: it mutates its own state and returns effects, never performs I/O.
//! The async driver in `session::runtime` executes the effects and feeds
//! fetch results back through [`SessionReconciler::on_fetch_completed`].

use tokio_util::sync::CancellationToken;

use super::record::ProfileRecord;
use super::seq::{FetchId, FetchSeq, FetchState};
use super::{StorageKey, ViewState};
use crate::auth::{AuthEvent, Identity};

/// Request to read both records for an identity.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub id: FetchId,
    pub identity: Identity,
    pub key: StorageKey,
    pub cancel: CancellationToken,
}

/// Result of both reads. `None` covers absent, malformed and failed reads alike.
#[derive(Debug, Clone)]
pub struct FetchCompleted {
    pub id: FetchId,
    pub identity: Identity,
    pub profile: Option<ProfileRecord>,
    pub score: Option<i64>,
}

/// Effects returned for the driver to execute.
#[derive(Debug)]
pub enum SessionEffect {
    /// Read the profile and score records.
    Fetch(FetchRequest),
    /// Cancel a superseded fetch.
    Cancel(CancellationToken),
}

#[derive(Debug, Default)]
pub struct SessionReconciler {
    seq: FetchSeq,
    fetch: FetchState,
    view: ViewState,
}

impl SessionReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether a fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.fetch.is_running()
    }

    /// Handles one auth-state change. The view is rebuilt from scratch.
    pub fn on_auth_event(&mut self, event: AuthEvent) -> Vec<SessionEffect> {
        let mut effects = Vec::new();
        if let Some(token) = self.fetch.take() {
            tracing::debug!("auth changed while a fetch was in flight; superseding it");
            effects.push(SessionEffect::Cancel(token));
        }

        match event {
            None => {
                tracing::info!("signed out");
                self.view = ViewState::signed_out();
            }
            Some(identity) => {
                if StorageKey::may_collide(identity.email()) {
                    tracing::warn!(
                        email = identity.email(),
                        "email contains a key substitution token; its storage key may collide"
                    );
                }
                let key = identity.storage_key();
                let id = self.seq.next_id();
                let cancel = CancellationToken::new();
                self.fetch.on_started(id, cancel.clone());
                tracing::info!(key = %key, fetch = id.0, "signed in; loading profile");

                self.view = ViewState::loading(identity.clone());
                effects.push(SessionEffect::Fetch(FetchRequest {
                    id,
                    identity,
                    key,
                    cancel,
                }));
            }
        }
        effects
    }

    /// Applies a fetch result if it belongs to the latest event.
    ///
    /// Returns true if the view changed.
    pub fn on_fetch_completed(&mut self, completed: FetchCompleted) -> bool {
        if !self.fetch.finish_if_active(completed.id) {
            tracing::debug!(fetch = completed.id.0, "discarding stale fetch result");
            return false;
        }

        let display_name = completed
            .profile
            .map(|profile| profile.display_name().to_string())
            .unwrap_or_default();
        self.view = ViewState::signed_in(
            completed.identity,
            display_name,
            completed.score.unwrap_or(0),
        );
        true
    }

    /// Stops tracking the active fetch, returning its token for cancellation.
    pub fn shutdown(&mut self) -> Option<CancellationToken> {
        self.fetch.take()
    }
}
