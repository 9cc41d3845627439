//! Local sign-in cache.
//!
//! Stores the signed-in identity at `$EXPLOITX_HOME/session.json` so a later
//! run can restore the session without signing in again.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Identity;

/// Loads the cached identity. A missing file means no session.
pub fn load(path: &Path) -> Result<Option<Identity>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    let identity: Identity = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session from {}", path.display()))?;
    // Re-validate: the file may have been edited by hand.
    Identity::new(identity.email()).map(Some)
}

/// Writes the identity, creating parent directories as needed.
pub fn save(path: &Path, identity: &Identity) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(identity)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write session to {}", path.display()))
}

/// Removes the cached identity. Returns true if a session was removed.
pub fn clear(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)
        .with_context(|| format!("Failed to remove session at {}", path.display()))?;
    Ok(true)
}
