use async_trait::async_trait;
use esback_core::{ClusterHealth, RepositoryDescriptor, Result, SnapshotRecord};
use std::collections::HashMap;

/// Operations the backup flow needs from a snapshot-capable cluster.
#[async_trait]
pub trait SnapshotStore {
    /// Current cluster health; transport failures surface as Connectivity.
    async fn cluster_health(&self) -> Result<ClusterHealth>;

    /// All registered snapshot repositories, keyed by name.
    async fn list_repositories(&self) -> Result<HashMap<String, RepositoryDescriptor>>;

    /// Register a repository. Returns the cluster's `acknowledged` flag.
    async fn create_repository(&self, name: &str, repo: &RepositoryDescriptor) -> Result<bool>;

    /// All snapshots in a repository, in the cluster's creation order.
    async fn list_snapshots(&self, repo: &str) -> Result<Vec<SnapshotRecord>>;

    /// Create a snapshot and block until the cluster reports completion.
    async fn create_snapshot(&self, repo: &str, snapshot: &str) -> Result<SnapshotRecord>;

    /// Delete a snapshot. Returns the cluster's `acknowledged` flag.
    async fn delete_snapshot(&self, repo: &str, snapshot: &str) -> Result<bool>;
}
