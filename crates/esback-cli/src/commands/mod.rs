pub mod prune;
pub mod run;
pub mod snapshots;

use anyhow::Result;
use esback_client::EsClient;
use esback_config::Config;
use esback_core::RepositoryDescriptor;
use esback_engine::BackupPlan;
use std::time::Duration;

fn client(config: &Config, cluster_url: Option<String>) -> Result<EsClient> {
    let url = cluster_url.unwrap_or_else(|| config.cluster_url.clone());
    let client = EsClient::new(&url, Duration::from_secs(config.timeout_secs))?;
    Ok(client)
}

fn plan(config: &Config, prefix: Option<String>, retain: Option<usize>) -> BackupPlan {
    BackupPlan {
        repository: config.repository.name.clone(),
        descriptor: RepositoryDescriptor::new(
            config.repository.kind.clone(),
            config.repository.settings.clone(),
        ),
        prefix: prefix.unwrap_or_else(|| config.snapshot.prefix.clone()),
        retain: retain.unwrap_or(config.snapshot.retain),
    }
}
