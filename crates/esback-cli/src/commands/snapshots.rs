use anyhow::Result;
use esback_client::SnapshotStore;
use esback_config::Config;

pub async fn handle(config: &Config) -> Result<()> {
    let client = super::client(config, None)?;
    let snapshots = client.list_snapshots(&config.repository.name).await?;

    if snapshots.is_empty() {
        println!(
            "No snapshots in repository '{}'.",
            config.repository.name
        );
        return Ok(());
    }

    println!(
        "Snapshots in '{}' ({} total):",
        config.repository.name,
        snapshots.len()
    );
    for snapshot in snapshots {
        println!("  {} [{}]", snapshot.name, snapshot.state);
    }

    Ok(())
}
