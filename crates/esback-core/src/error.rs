use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Missing configuration: {0}")]
    Precondition(String),

    #[error("Cluster unhealthy or unreachable: {0}")]
    Connectivity(String),

    #[error("Repository '{0}' not usable: {1}")]
    Repository(String, String),

    #[error("Snapshot '{0}' did not complete: {1}")]
    SnapshotCreation(String, String),

    #[error("Snapshot '{0}' was not deleted: {1}")]
    SnapshotDeletion(String, String),

    #[error("Unexpected response from cluster: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BackupError>;
