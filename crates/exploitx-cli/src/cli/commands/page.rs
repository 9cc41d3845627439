//! Full-screen event page.

use std::sync::Arc;

use anyhow::Result;
use exploitx_core::auth::{self, session_file};
use exploitx_core::catalog::Catalog;
use exploitx_core::config::{Config, paths};
use exploitx_core::logging;
use exploitx_core::session;
use exploitx_core::store::Store;
use exploitx_tui::PageContext;

pub async fn run(config: &Config, level: &str) -> Result<()> {
    let _log_guard = logging::init_file(&paths::logs_dir(), level)?;

    let catalog = Catalog::builtin()?;
    let store = Store::from_config(&config.store)?;
    let store_label = store.describe();
    tracing::info!(store = %store_label, "opening event page");

    let session_path = paths::session_path();
    let restored = session_file::load(&session_path).unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable session file");
        None
    });

    let (publisher, subscription) = auth::channel();
    let session = session::start(Arc::new(store), subscription);
    // Session restore: the provider reports once on startup.
    publisher.publish(restored);

    exploitx_tui::run_page(PageContext {
        session,
        auth: publisher,
        session_path,
        catalog,
        store_label,
    })
    .await
}
