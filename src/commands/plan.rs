use std::path::Path;

use anyhow::Result;

use super::SyncContext;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let ctx = SyncContext::load(config_path)?;
    let plan = ctx.synchronizer.plan(&ctx.records).await?;
    let changes = &plan.reconciliation;

    println!(
        "📅 {} (events since {})",
        ctx.synchronizer.config().calendar_id,
        plan.time_min
    );

    if changes.is_empty() {
        println!("Nothing to sync.");
        return Ok(());
    }

    for id in &changes.to_create {
        println!("    + {}", id);
    }
    for id in &changes.to_update {
        println!("    ~ {}", id);
    }
    for id in &changes.orphaned {
        println!("    ! {} (not in source file, will be flagged)", id);
    }

    println!("\nRun `schedsync run` to apply these changes.");

    Ok(())
}
