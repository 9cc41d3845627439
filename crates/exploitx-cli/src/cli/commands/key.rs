use anyhow::Result;
use exploitx_core::auth::Identity;
use exploitx_core::session::StorageKey;

pub fn show(email: &str) -> Result<()> {
    let identity = Identity::new(email)?;
    let key = identity.storage_key();
    if StorageKey::may_collide(identity.email()) {
        eprintln!(
            "warning: {identity} contains `_dot_` or `_at_`; its key may collide with another email"
        );
    }
    println!("key:     {key}");
    println!("profile: {}", key.profile_path());
    println!("score:   {}", key.score_path());
    Ok(())
}
