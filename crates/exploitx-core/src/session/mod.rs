//! User session and score projection.
//!
//! Reconciles the auth event stream with the `users/<key>` and `scores/<key>`
//! records and publishes a single [`ViewState`]:
//!
//! ```text
//! AuthSubscription ──► runtime (driver task) ──► SessionReconciler (pure)
//!                          │      ▲                     │
//!                   spawn fetch   └── FetchCompleted ◄──┘ effects
//!                          ▼
//!                     KeyValueStore
//!
//! driver ──► watch::Sender<ViewState> ──► page / CLI
//! ```

mod key;
mod reconciler;
mod record;
pub mod runtime;
mod seq;
mod view;

pub use key::StorageKey;
pub use reconciler::{FetchCompleted, FetchRequest, SessionEffect, SessionReconciler};
pub use record::{ProfileRecord, score_from_value};
pub use runtime::{SessionHandle, start};
pub use seq::FetchId;
pub use view::{Phase, ViewState};
