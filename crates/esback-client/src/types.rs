//! Typed responses for the snapshot API endpoints
//!
//! Every endpoint gets an explicit struct so a missing field is a decode
//! error rather than a silently-empty value.

use esback_core::SnapshotRecord;
use serde::Deserialize;

/// `GET /_cluster/health`
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Control-plane mutations (`PUT /_snapshot/{repo}`, `DELETE .../{name}`)
#[derive(Debug, Deserialize)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

/// `GET /_snapshot/{repo}/_all`
#[derive(Debug, Deserialize)]
pub struct SnapshotListResponse {
    pub snapshots: Vec<SnapshotRecord>,
}

/// `PUT /_snapshot/{repo}/{name}?wait_for_completion=true`
#[derive(Debug, Deserialize)]
pub struct CreateSnapshotResponse {
    pub snapshot: SnapshotRecord,
}
