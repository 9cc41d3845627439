//! Login/logout handlers for the cached sign-in.

use anyhow::Result;
use exploitx_core::auth::{Identity, session_file};
use exploitx_core::config::paths;

pub fn login(email: &str) -> Result<()> {
    let identity = Identity::new(email)?;
    let path = paths::session_path();
    session_file::save(&path, &identity)?;
    tracing::debug!(path = %path.display(), "cached sign-in");
    println!("Signed in as {identity}");
    Ok(())
}

pub fn logout() -> Result<()> {
    if session_file::clear(&paths::session_path())? {
        println!("Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}
