//! Effect handlers.
//!
//! Each handler performs the I/O for one effect and reports the outcome as a
//! `UiEvent` for the reducer.

use std::path::Path;

use exploitx_core::auth::{AuthPublisher, Identity, session_file};

use crate::events::UiEvent;
use crate::state::Notice;

const DRIVER_GONE: &str = "Session driver stopped; restart exploitx";

pub fn sign_in(auth: &AuthPublisher, session_path: &Path, identity: Identity) -> UiEvent {
    if let Err(err) = session_file::save(session_path, &identity) {
        tracing::warn!(error = %format!("{err:#}"), "failed to cache sign-in");
        return UiEvent::Notice(Notice::error(format!("Sign in failed: {err:#}")));
    }
    let email = identity.email().to_string();
    if !auth.sign_in(identity) {
        return UiEvent::Notice(Notice::error(DRIVER_GONE));
    }
    tracing::info!(%email, "signed in");
    UiEvent::Notice(Notice::info(format!("Signing in as {email}…")))
}

pub fn sign_out(auth: &AuthPublisher, session_path: &Path) -> UiEvent {
    if let Err(err) = session_file::clear(session_path) {
        tracing::warn!(error = %format!("{err:#}"), "failed to clear cached sign-in");
        return UiEvent::Notice(Notice::error(format!("Sign out failed: {err:#}")));
    }
    if !auth.sign_out() {
        return UiEvent::Notice(Notice::error(DRIVER_GONE));
    }
    tracing::info!("signed out");
    UiEvent::Notice(Notice::info("Signed out"))
}

pub fn refresh(auth: &AuthPublisher, identity: Identity) -> UiEvent {
    if !auth.sign_in(identity) {
        return UiEvent::Notice(Notice::error(DRIVER_GONE));
    }
    UiEvent::Notice(Notice::info("Refreshing profile…"))
}

pub fn open_url(url: &str) -> UiEvent {
    match open::that(url) {
        Ok(()) => UiEvent::Notice(Notice::info(format!("Opened {url}"))),
        Err(err) => {
            tracing::warn!(%url, %err, "failed to open link");
            UiEvent::Notice(Notice::error(format!("Could not open {url}: {err}")))
        }
    }
}
