//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never touches the
//! session file, the auth stream or the browser directly.

use exploitx_core::auth::Identity;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Cache the identity on disk and publish a sign-in event.
    SignIn { identity: Identity },

    /// Remove the cached identity and publish a sign-out event.
    SignOut,

    /// Publish the current identity again so both records are re-read.
    Refresh { identity: Identity },

    /// Open a link in the system browser.
    OpenUrl { url: String },
}
