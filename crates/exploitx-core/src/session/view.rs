//! Consolidated view-state published to the presentation layer.

use serde::Serialize;

use crate::auth::Identity;

/// The three mutually exclusive phases of the profile widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A session exists (or has not been reported yet) and records are being read.
    Loading,
    /// No session.
    SignedOut,
    /// Session with both records resolved.
    SignedIn,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::SignedOut => "signed out",
            Phase::SignedIn => "signed in",
        }
    }
}

/// Snapshot of the session as seen by the page.
///
/// Always replaced as a whole; never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub display_name: String,
    pub score: i64,
}

impl ViewState {
    /// State before the auth provider has reported anything.
    pub fn initial() -> Self {
        Self {
            phase: Phase::Loading,
            identity: None,
            display_name: String::new(),
            score: 0,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            phase: Phase::SignedOut,
            identity: None,
            display_name: String::new(),
            score: 0,
        }
    }

    pub fn loading(identity: Identity) -> Self {
        Self {
            phase: Phase::Loading,
            identity: Some(identity),
            display_name: String::new(),
            score: 0,
        }
    }

    pub fn signed_in(identity: Identity, display_name: String, score: i64) -> Self {
        Self {
            phase: Phase::SignedIn,
            identity: Some(identity),
            display_name,
            score,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(Identity::email)
    }

    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Loading
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}
