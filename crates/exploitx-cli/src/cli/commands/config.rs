//! Config command handlers.

use anyhow::{Context, Result};
use exploitx_core::config::{self, Config};
use exploitx_core::store::RtdbStore;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn set_url(current: &Config, url: &str) -> Result<()> {
    // Reject URLs the REST client could not use before touching the file.
    RtdbStore::new(url, None, current.store.timeout())?;

    let config_path = config::paths::config_path();
    Config::save_store_url_to(&config_path, url)
        .with_context(|| format!("update config at {}", config_path.display()))?;
    println!("Database URL set in {}", config_path.display());
    Ok(())
}
