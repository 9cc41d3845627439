//! Authentication event source.
//!
//! The identity provider is external. This module only models what the page
//! consumes from it: a stream of `Option<Identity>` notifications, one per
//! sign-in, sign-out or session restore.

pub mod session_file;

use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::session::StorageKey;

/// Authenticated principal reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    email: String,
}

impl Identity {
    /// Creates an identity from an email the provider has already verified.
    ///
    /// # Errors
    /// Returns an error if the email is empty or has no `@`.
    pub fn new(email: impl Into<String>) -> Result<Self> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            bail!("Email must not be empty");
        }
        if !email.contains('@') {
            bail!("Invalid email address: {email}");
        }
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn storage_key(&self) -> StorageKey {
        StorageKey::from_email(&self.email)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// One auth-state change: `Some` for an active session, `None` for no session.
pub type AuthEvent = Option<Identity>;

/// Sending half of the auth event stream, held by whatever stands in for the
/// identity provider.
#[derive(Debug, Clone)]
pub struct AuthPublisher {
    tx: mpsc::UnboundedSender<AuthEvent>,
}

impl AuthPublisher {
    /// Publishes an event. Returns false if the subscriber is gone.
    pub fn publish(&self, event: AuthEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn sign_in(&self, identity: Identity) -> bool {
        self.publish(Some(identity))
    }

    pub fn sign_out(&self) -> bool {
        self.publish(None)
    }
}

/// Receiving half of the auth event stream.
#[derive(Debug)]
pub struct AuthSubscription {
    rx: mpsc::UnboundedReceiver<AuthEvent>,
}

impl AuthSubscription {
    /// Waits for the next event. `None` means the provider side has closed.
    pub async fn recv(&mut self) -> Option<AuthEvent> {
        self.rx.recv().await
    }
}

/// Creates a connected publisher/subscription pair.
pub fn channel() -> (AuthPublisher, AuthSubscription) {
    let (tx, rx) = mpsc::unbounded_channel();
    (AuthPublisher { tx }, AuthSubscription { rx })
}
