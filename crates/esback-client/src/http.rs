use async_trait::async_trait;
use esback_core::{BackupError, ClusterHealth, RepositoryDescriptor, Result, SnapshotRecord};
use std::collections::HashMap;
use std::time::Duration;

use crate::store::SnapshotStore;
use crate::types::{
    AcknowledgedResponse, CreateSnapshotResponse, HealthResponse, SnapshotListResponse,
};

/// reqwest-backed client for an Elasticsearch-compatible snapshot API.
pub struct EsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("esback/0.2 (snapshot backup)")
            .timeout(timeout)
            .build()
            .map_err(|e| {
                BackupError::Connectivity(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the body and decode it through serde so a malformed or
    /// incomplete response surfaces as a Decode error, not as defaults.
    async fn decode<T>(response: reqwest::Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = response
            .text()
            .await
            .map_err(|e| BackupError::Connectivity(format!("failed to read response: {e}")))?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn transport(err: reqwest::Error) -> BackupError {
    BackupError::Connectivity(err.to_string())
}

#[async_trait]
impl SnapshotStore for EsClient {
    async fn cluster_health(&self) -> Result<ClusterHealth> {
        let url = self.endpoint("/_cluster/health");
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(BackupError::Connectivity(format!(
                "health endpoint answered HTTP {}",
                response.status().as_u16()
            )));
        }

        let health: HealthResponse = Self::decode(response).await?;
        Ok(ClusterHealth::from(health.status.as_str()))
    }

    async fn list_repositories(&self) -> Result<HashMap<String, RepositoryDescriptor>> {
        let url = self.endpoint("/_snapshot/");
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(BackupError::Connectivity(format!(
                "repository listing answered HTTP {}",
                response.status().as_u16()
            )));
        }

        Self::decode(response).await
    }

    async fn create_repository(&self, name: &str, repo: &RepositoryDescriptor) -> Result<bool> {
        let url = self.endpoint(&format!("/_snapshot/{name}"));
        tracing::debug!("PUT {url}");

        let response = self
            .http
            .put(&url)
            .json(repo)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(BackupError::Repository(
                name.to_string(),
                format!("cluster answered HTTP {}", response.status().as_u16()),
            ));
        }

        let ack: AcknowledgedResponse = Self::decode(response).await?;
        Ok(ack.acknowledged)
    }

    async fn list_snapshots(&self, repo: &str) -> Result<Vec<SnapshotRecord>> {
        let url = self.endpoint(&format!("/_snapshot/{repo}/_all"));
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(BackupError::Connectivity(format!(
                "snapshot listing answered HTTP {}",
                response.status().as_u16()
            )));
        }

        let listing: SnapshotListResponse = Self::decode(response).await?;
        Ok(listing.snapshots)
    }

    async fn create_snapshot(&self, repo: &str, snapshot: &str) -> Result<SnapshotRecord> {
        // wait_for_completion makes the cluster hold the request open
        // until the snapshot finishes; no client-side polling.
        let url = self.endpoint(&format!(
            "/_snapshot/{repo}/{snapshot}?wait_for_completion=true"
        ));
        tracing::debug!("PUT {url}");

        let response = self.http.put(&url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(BackupError::SnapshotCreation(
                snapshot.to_string(),
                format!("cluster answered HTTP {}", response.status().as_u16()),
            ));
        }

        let created: CreateSnapshotResponse = Self::decode(response).await?;
        Ok(created.snapshot)
    }

    async fn delete_snapshot(&self, repo: &str, snapshot: &str) -> Result<bool> {
        let url = self.endpoint(&format!("/_snapshot/{repo}/{snapshot}"));
        tracing::debug!("DELETE {url}");

        let response = self.http.delete(&url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            // The cluster reports deletion failures with an error body;
            // treat them as not acknowledged and let the caller decide.
            return Ok(false);
        }

        let ack: AcknowledgedResponse = Self::decode(response).await?;
        Ok(ack.acknowledged)
    }
}
