//! One-shot profile lookup.
//!
//! Runs the same session driver the page uses, feeds it a single auth event
//! and prints the first settled view.

use std::sync::Arc;

use anyhow::{Context, Result};
use exploitx_core::auth::{self, Identity, session_file};
use exploitx_core::config::{Config, paths};
use exploitx_core::session::{self, Phase, ViewState};
use exploitx_core::store::Store;

pub async fn run(config: &Config, email: Option<&str>, json: bool) -> Result<()> {
    let identity = match email {
        Some(email) => Some(Identity::new(email)?),
        None => session_file::load(&paths::session_path())?,
    };

    let store = Store::from_config(&config.store)?;
    tracing::debug!(store = %store.describe(), "profile lookup");

    let (publisher, subscription) = auth::channel();
    let session = session::start(Arc::new(store), subscription);
    publisher.publish(identity);
    let view = session.settled().await;
    session.stop().await;

    print_view(&view, json)
}

fn print_view(view: &ViewState, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(view).context("serialize view")?;
        println!("{out}");
        return Ok(());
    }

    match view.phase {
        Phase::SignedIn => {
            println!("Email: {}", view.email().unwrap_or_default());
            if !view.display_name.is_empty() {
                println!("Name:  {}", view.display_name);
            }
            println!("Score: {}", view.score);
        }
        Phase::SignedOut => {
            println!("Not signed in.");
            println!("Run `exploitx login --email <EMAIL>` or pass --email.");
        }
        Phase::Loading => println!("Profile is still loading."),
    }
    Ok(())
}
