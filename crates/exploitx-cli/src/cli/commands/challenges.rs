use anyhow::{Context, Result};
use exploitx_core::catalog::Catalog;

pub fn list(json: bool) -> Result<()> {
    let catalog = Catalog::builtin()?;

    if json {
        let out = serde_json::to_string_pretty(catalog.challenges())
            .context("serialize challenges")?;
        println!("{out}");
        return Ok(());
    }

    for challenge in catalog.challenges() {
        println!(
            "#{:<3} {} ({} pts)",
            challenge.id, challenge.title, challenge.point
        );
        if let Some(attachment) = challenge.attachment() {
            println!("     attachment: {attachment}");
        }
    }
    println!(
        "{} challenges, {} points total",
        catalog.len(),
        catalog.total_points()
    );
    Ok(())
}
