use async_trait::async_trait;
use esback_client::SnapshotStore;
use esback_config::Config;
use esback_core::{
    BackupError, ClusterHealth, RepositoryDescriptor, Result, SnapshotRecord, SnapshotState,
};
use esback_engine::{BackupPlan, BackupRunner, RunOutcome};
use esback_notify::Notifier;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for a cluster, recording every call it sees.
struct FakeCluster {
    health: ClusterHealth,
    repositories: HashMap<String, RepositoryDescriptor>,
    snapshots: Mutex<Vec<SnapshotRecord>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCluster {
    fn new(health: ClusterHealth) -> Self {
        Self {
            health,
            repositories: HashMap::new(),
            snapshots: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl SnapshotStore for FakeCluster {
    async fn cluster_health(&self) -> Result<ClusterHealth> {
        self.record("health");
        Ok(self.health)
    }

    async fn list_repositories(&self) -> Result<HashMap<String, RepositoryDescriptor>> {
        self.record("list_repositories");
        Ok(self.repositories.clone())
    }

    async fn create_repository(&self, name: &str, _repo: &RepositoryDescriptor) -> Result<bool> {
        self.record(format!("create_repository {name}"));
        Ok(true)
    }

    async fn list_snapshots(&self, _repo: &str) -> Result<Vec<SnapshotRecord>> {
        self.record("list_snapshots");
        Ok(self.snapshots.lock().unwrap().clone())
    }

    async fn create_snapshot(&self, _repo: &str, snapshot: &str) -> Result<SnapshotRecord> {
        self.record(format!("create_snapshot {snapshot}"));
        let record = SnapshotRecord::new(snapshot, SnapshotState::Success);
        self.snapshots.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn delete_snapshot(&self, _repo: &str, snapshot: &str) -> Result<bool> {
        self.record(format!("delete {snapshot}"));
        self.snapshots
            .lock()
            .unwrap()
            .retain(|s| s.name != snapshot);
        Ok(true)
    }
}

fn plan_from_config(config: &Config) -> BackupPlan {
    BackupPlan {
        repository: config.repository.name.clone(),
        descriptor: RepositoryDescriptor::new(
            config.repository.kind.clone(),
            config.repository.settings.clone(),
        ),
        prefix: config.snapshot.prefix.clone(),
        retain: config.snapshot.retain,
    }
}

#[tokio::test]
async fn test_config_driven_backup_pass() {
    let config: Config = toml::from_str(
        r#"
        cluster_url = "http://es01:9200"

        [repository]
        name = "nightly"
        kind = "fs"

        [repository.settings]
        location = "/var/backups/es"

        [snapshot]
        prefix = "elasticbackup"
        retain = 3
        "#,
    )
    .unwrap();

    let mut cluster = FakeCluster::new(ClusterHealth::Yellow);
    cluster.repositories.insert(
        "nightly".to_string(),
        RepositoryDescriptor::new("fs".into(), serde_json::json!({"location": "/var/backups/es"})),
    );
    for day in 1..=5 {
        cluster.snapshots.lock().unwrap().push(SnapshotRecord::new(
            format!("elasticbackup-2024-01-0{day}_00-00"),
            SnapshotState::Success,
        ));
    }

    let runner = BackupRunner::new(cluster, Notifier::disabled(), plan_from_config(&config));
    let outcome = runner.run().await.unwrap();

    let RunOutcome::Completed { snapshot, pruned } = outcome else {
        panic!("expected a completed run");
    };
    assert!(snapshot.starts_with("elasticbackup-"));
    // 5 existing, retain 3: the 2 oldest go.
    assert_eq!(pruned, 2);
}

#[tokio::test]
async fn test_red_cluster_makes_no_mutations() {
    let cluster = FakeCluster::new(ClusterHealth::Red);
    let config = Config::default();

    let runner = BackupRunner::new(cluster, Notifier::disabled(), plan_from_config(&config));
    let err = runner.run().await.unwrap_err();

    assert!(matches!(err, BackupError::Connectivity(_)));
    let calls = runner.store().calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["health".to_string()]);
}
