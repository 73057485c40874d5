use anyhow::Result;
use esback_config::Config;
use esback_engine::{BackupRunner, RunOutcome};
use esback_notify::Notifier;

pub async fn handle(
    config: &Config,
    prefix: Option<String>,
    retain: Option<usize>,
    cluster_url: Option<String>,
) -> Result<()> {
    let client = super::client(config, cluster_url)?;
    let notifier = Notifier::new(config.webhook_url.clone());
    let plan = super::plan(config, prefix, retain);

    let runner = BackupRunner::new(client, notifier, plan);

    match runner.run().await? {
        RunOutcome::Completed { snapshot, pruned } => {
            println!("✓ Backup complete: {snapshot}");
            if pruned > 0 {
                println!("  Pruned {pruned} old snapshot(s)");
            }
        }
        RunOutcome::AlreadyBackedUp { snapshot } => {
            println!("✓ Snapshot {snapshot} already exists, nothing to do");
        }
    }

    Ok(())
}
