use std::path::Path;

use anyhow::Result;

use super::SyncContext;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let ctx = SyncContext::load(config_path)?;
    let calendar_id = &ctx.synchronizer.config().calendar_id;

    println!("📅 Syncing {} records to {}", ctx.records.len(), calendar_id);

    let report = ctx.synchronizer.run(&ctx.records).await?;

    println!(
        "\nSynced {} created, {} updated, {} flagged, {} failed",
        report.created, report.updated, report.flagged, report.failed
    );

    if report.failed > 0 {
        println!("Some events could not be created; see the log above for details.");
    }

    Ok(())
}
