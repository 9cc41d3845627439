//! Full-screen event page for ExploitX.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::path::PathBuf;

use anyhow::Result;
use exploitx_core::auth::AuthPublisher;
use exploitx_core::catalog::Catalog;
use exploitx_core::session::SessionHandle;
pub use features::{challenges, event, profile, rules};
pub use runtime::TuiRuntime;

/// Everything the page needs from the outside world.
pub struct PageContext {
    /// Running session driver; the page renders its view.
    pub session: SessionHandle,
    /// Stand-in identity provider used by the sign-in overlay.
    pub auth: AuthPublisher,
    /// Where sign-ins are cached.
    pub session_path: PathBuf,
    pub catalog: Catalog,
    /// Human-readable store description for the status line.
    pub store_label: String,
}

/// Runs the page until the user quits, then stops the session driver.
pub async fn run_page(ctx: PageContext) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The event page requires a terminal.\n\
             Use `exploitx profile` or `exploitx challenges` for non-interactive output."
        );
    }

    let PageContext {
        session,
        auth,
        session_path,
        catalog,
        store_label,
    } = ctx;

    // The event loop blocks; keep the session driver's worker free.
    let result = tokio::task::block_in_place(|| {
        let mut runtime =
            TuiRuntime::new(session.subscribe(), auth, session_path, catalog, store_label)?;
        runtime.run()
    });

    session.stop().await;
    result
}
