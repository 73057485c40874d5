use anyhow::Result;
use esback_config::Config;
use esback_engine::BackupRunner;
use esback_notify::Notifier;

pub async fn handle(config: &Config, retain: Option<usize>) -> Result<()> {
    let client = super::client(config, None)?;
    let notifier = Notifier::new(config.webhook_url.clone());
    let plan = super::plan(config, None, retain);

    let runner = BackupRunner::new(client, notifier, plan);
    let deleted = runner.prune().await?;

    if deleted == 0 {
        println!("Nothing to prune.");
    } else {
        println!("✓ Pruned {deleted} snapshot(s)");
    }

    Ok(())
}
